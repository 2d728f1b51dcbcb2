// https://schema.org/Person
use serde::Serialize;

use super::metadata::{PROFILE_IMAGE_URL, SITE_URL};

pub const SCHEMA_ORG_CONTEXT: &str = "http://schema.org";
const PERSON: &str = "Person";
const POSTAL_ADDRESS: &str = "PostalAddress";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub object_type: &'static str,
    pub address_locality: &'static str,
    pub address_region: &'static str,
    pub address_country: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub object_type: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub url: &'static str,
    pub same_as: &'static [&'static str],
    pub address: PostalAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumni_of: Option<&'static str>,
    pub image: &'static str,
}

/// Makes JSON safe for embedding into <script> element.
/// Replaced characters are escaped with JSON unicode escapes,
/// so the parsed value doesn't change.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

impl PersonSchema {
    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(escape_script_json(&json))
    }
}

pub const SITE_PERSON: PersonSchema = PersonSchema {
    context: SCHEMA_ORG_CONTEXT,
    object_type: PERSON,
    name: "Tomas Manazza",
    job_title: "Programador Full Stack (Next.js & React Developer)",
    url: SITE_URL,
    // Twitter profile is not known yet
    same_as: &[
        "https://www.linkedin.com/in/tomasmanazza/",
        "https://github.com/tomasmanazza",
        "https://www.emptydevelopment.com/",
    ],
    address: PostalAddress {
        object_type: POSTAL_ADDRESS,
        address_locality: "Santa Fe",
        address_region: "Santa Fe",
        address_country: "AR",
    },
    alumni_of: None,
    image: PROFILE_IMAGE_URL,
};
