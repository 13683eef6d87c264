//! schema.org JSON-LD descriptors for the landing page

use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A `{"@type": ..., "name": ...}` reference to another entity
#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

impl EntityRef {
    const fn new(kind: &'static str, name: &'static str) -> Self {
        Self { kind, name }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub telephone: &'static str,
    pub contact_type: &'static str,
    pub email: &'static str,
    pub available_language: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_country: &'static str,
    pub address_locality: &'static str,
    pub address_region: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub alternate_name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub founding_date: &'static str,
    pub founders: Vec<EntityRef>,
    pub industry: &'static str,
    pub number_of_employees: &'static str,
    pub contact_point: Vec<ContactPoint>,
    pub address: PostalAddress,
    pub same_as: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub in_language: &'static str,
    pub is_part_of: EntityRef,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub audience_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub price_currency: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialService {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub provider: EntityRef,
    pub description: &'static str,
    pub service_type: &'static str,
    pub area_served: EntityRef,
    pub audience: Audience,
    pub offers: Offer,
}

/// The three descriptors search engines read from the page
#[derive(Debug, Clone, Serialize)]
pub struct StructuredData {
    pub organization: Organization,
    pub website: WebSite,
    pub service: FinancialService,
}

impl Default for StructuredData {
    fn default() -> Self {
        Self {
            organization: Organization {
                context: SCHEMA_CONTEXT,
                kind: "Organization",
                name: "AGRiNVEST",
                alternate_name: "AGRiNVEST Philippines",
                url: "https://agrinvest.ph",
                logo: "https://agrinvest.ph/logo.png",
                description: "Agricultural investment platform connecting Filipino farmers with investors for sustainable growth",
                founding_date: "2025",
                founders: vec![EntityRef::new("Person", "AGRiNVEST Team")],
                industry: "Agricultural Finance",
                number_of_employees: "10-50",
                contact_point: vec![ContactPoint {
                    kind: "ContactPoint",
                    telephone: "+63-2-123-4567",
                    contact_type: "Customer Service",
                    email: "hello@agrinvest.ph",
                    available_language: vec!["English", "Filipino"],
                }],
                address: PostalAddress {
                    kind: "PostalAddress",
                    address_country: "PH",
                    address_locality: "Manila",
                    address_region: "Metro Manila",
                },
                same_as: vec![
                    "https://facebook.com/agrinvestph",
                    "https://instagram.com/agrinvestph",
                    "https://linkedin.com/company/agrinvestph",
                    "https://twitter.com/agrinvestph",
                ],
            },
            website: WebSite {
                context: SCHEMA_CONTEXT,
                kind: "WebSite",
                name: "AGRiNVEST",
                url: "https://agrinvest.ph",
                description: "Agricultural investment platform for supporting Filipino farmers",
                in_language: "en-PH",
                is_part_of: EntityRef::new("Organization", "AGRiNVEST"),
            },
            service: FinancialService {
                context: SCHEMA_CONTEXT,
                kind: "FinancialService",
                name: "AGRiNVEST Investment Platform",
                provider: EntityRef::new("Organization", "AGRiNVEST"),
                description: "Interest-free agricultural investment platform connecting investors with Filipino farmers",
                service_type: "Agricultural Investment",
                area_served: EntityRef::new("Country", "Philippines"),
                audience: Audience {
                    kind: "Audience",
                    audience_type: "Investors and Farmers",
                },
                offers: Offer {
                    kind: "Offer",
                    description: "Minimum ₱50 investment with interest-free capital for farmers",
                    price: "50",
                    price_currency: "PHP",
                },
            },
        }
    }
}

impl StructuredData {
    /// Each descriptor as its own pretty-printed JSON-LD document
    pub fn documents(&self) -> serde_json::Result<Vec<String>> {
        Ok(vec![
            serde_json::to_string_pretty(&self.organization)?,
            serde_json::to_string_pretty(&self.website)?,
            serde_json::to_string_pretty(&self.service)?,
        ])
    }

    /// All descriptors joined into one text block, separated by blank lines
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        Ok(self.documents()?.join("\n\n"))
    }
}
