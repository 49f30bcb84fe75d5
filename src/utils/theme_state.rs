use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };

/// The two themes a page can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeState::Dark)
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { ThemeState::Dark } else { ThemeState::Light }
    }
}

impl FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeState::Light),
            "dark" => Ok(ThemeState::Dark),
            other => Err(format!("unknown theme value {:?}", other)),
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
