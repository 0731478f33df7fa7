use contracts::system::settings::AppSettings;
use once_cell::sync::OnceCell;
use std::sync::RwLock;

/// Settings of the running service, replaced as a whole by PUT
static SETTINGS: OnceCell<RwLock<AppSettings>> = OnceCell::new();

fn cell() -> &'static RwLock<AppSettings> {
    SETTINGS.get_or_init(|| RwLock::new(AppSettings::default()))
}

/// Seed the settings from configuration; ignored once set
pub fn initialize(defaults: AppSettings) {
    if SETTINGS.set(RwLock::new(defaults)).is_err() {
        tracing::warn!("Settings already initialized, configuration defaults ignored");
    }
}

pub fn get() -> AppSettings {
    cell()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the settings, returning the stored value
pub fn replace(settings: AppSettings) -> AppSettings {
    let mut guard = cell()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = settings;
    tracing::info!(
        "Settings updated: theme={:?} language={:?} currency={}",
        guard.theme,
        guard.language,
        guard.currency.code()
    );
    guard.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::{Currency, Theme};

    #[test]
    fn test_replace_then_get() {
        let mut updated = get();
        updated.theme = Theme::Blue;
        updated.currency = Currency::USD;
        updated.email_notifications = true;
        assert_eq!(replace(updated.clone()), updated);
        assert_eq!(get(), updated);
    }
}
