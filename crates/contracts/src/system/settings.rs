use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    MXN,
    USD,
    EUR,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MXN | Currency::USD => "$",
            Currency::EUR => "€",
        }
    }
}

/// User preferences of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
    pub currency: Currency,
    pub notifications: bool,
    pub auto_backup: bool,
    pub low_stock_alert: bool,
    pub email_notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            language: Language::Es,
            currency: Currency::MXN,
            notifications: true,
            auto_backup: true,
            low_stock_alert: true,
            email_notifications: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.currency, Currency::MXN);
        assert!(settings.low_stock_alert);
        assert!(!settings.email_notifications);
    }

    #[test]
    fn test_partial_body_keeps_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"theme": "dark", "currency": "EUR"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.currency.symbol(), "€");
        assert_eq!(settings.language, Language::Es);
        assert!(settings.notifications);
    }
}
