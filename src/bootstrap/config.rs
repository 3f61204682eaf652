use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// BCP-47 locale used to order tag titles for display.
    pub sort_locale: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let sort_locale = env::var("TAG_SORT_LOCALE").unwrap_or_else(|_| "zh".into());
        Ok(Self { sort_locale })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_locale: "zh".into(),
        }
    }
}
