use serde::{Deserialize, Serialize};

use super::ids::{ApplicationId, PartyId, SellerId, ServiceId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ServiceId,
    pub title: String,
    pub seller: String,
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    #[serde(default)]
    pub rating: f32,
    pub price: String,
    pub category: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub service_id: ServiceId,
    pub author: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub id: SellerId,
    pub name: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Interview,
    Approved,
    Rejected,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyApplication {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub user_name: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: PartyId,
    pub organizer_id: UserId,
    pub organizer_name: String,
    pub title: String,
    pub city: String,
    pub date: String,
    #[serde(default)]
    pub max_tickets: u32,
    #[serde(default)]
    pub sold_tickets: u32,
    #[serde(default)]
    pub applications: Vec<PartyApplication>,
}

impl Party {
    pub fn tickets_left(&self) -> u32 {
        self.max_tickets.saturating_sub(self.sold_tickets)
    }
}

/// Externally supplied lookup tables the router consults for guard checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub sellers: Vec<SellerProfile>,
    #[serde(default)]
    pub parties: Vec<Party>,
}

impl Directory {
    pub fn seller(&self, id: SellerId) -> Option<&SellerProfile> {
        self.sellers.iter().find(|s| s.id == id)
    }

    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn parties_organized_by(&self, organizer: UserId) -> Vec<Party> {
        self.parties
            .iter()
            .filter(|p| p.organizer_id == organizer)
            .cloned()
            .collect()
    }
}
