use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

id_newtype!(ServiceId);
id_newtype!(SellerId);
id_newtype!(PartyId);
id_newtype!(ApplicationId);
id_newtype!(OrderChatId);
id_newtype!(BookingId);
id_newtype!(NotificationId);
id_newtype!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_id_round_trips_through_u64() {
        let id = PartyId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, PartyId::new(42));
    }

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(ServiceId::new(7).to_string(), "7");
        assert_eq!(OrderChatId::new(1001).to_string(), "1001");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&SellerId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: SellerId = serde_json::from_str("3").unwrap();
        assert_eq!(back, SellerId::new(3));
    }
}
