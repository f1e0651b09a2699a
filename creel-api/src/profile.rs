use crate::Error;

/// Public profile record, kept separate from the account itself
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub state: String,
    pub biography: String,

    /// URL of an externally hosted image
    pub profile_picture: String,

    pub email: String,
    pub website: String,
    pub social_media_links: Vec<SocialLink>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SocialLink {
    pub url: String,
    pub platform: String,
}

impl Profile {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_name(&self.username)?;
        for s in [
            &self.name,
            &self.state,
            &self.biography,
            &self.profile_picture,
            &self.email,
            &self.website,
        ] {
            crate::validate_string(s)?;
        }
        for link in &self.social_media_links {
            crate::validate_string(&link.url)?;
            crate::validate_string(&link.platform)?;
        }
        Ok(())
    }
}
