use serde::{Deserialize, Serialize};

/// Session role. The state bag holds `Option<UserRole>`; `None` is a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VipStatus {
    #[default]
    None,
    Vip,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub vip_status: VipStatus,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
    pub vip_status: Option<VipStatus>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(nickname) = patch.nickname {
            self.nickname = nickname;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(city) = patch.city {
            self.city = Some(city);
        }
        if let Some(vip) = patch.vip_status {
            self.vip_status = vip;
        }
    }

    /// Display name: nickname if set, otherwise name, otherwise a placeholder
    pub fn display_name(&self) -> &str {
        if !self.nickname.is_empty() {
            &self.nickname
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "guest"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut profile = Profile {
            name: "Anna".into(),
            city: Some("Riga".into()),
            ..Profile::default()
        };
        profile.apply(ProfilePatch {
            age: Some(29),
            ..ProfilePatch::default()
        });
        assert_eq!(profile.name, "Anna");
        assert_eq!(profile.age, Some(29));
        assert_eq!(profile.city.as_deref(), Some("Riga"));
    }

    #[test]
    fn display_name_prefers_nickname() {
        let mut profile = Profile::default();
        assert_eq!(profile.display_name(), "guest");
        profile.name = "Anna".into();
        assert_eq!(profile.display_name(), "Anna");
        profile.nickname = "anna_k".into();
        assert_eq!(profile.display_name(), "anna_k");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Seller).unwrap(), "\"seller\"");
    }
}
