//! Label lookup seam for the dialog's button captions.
//!
//! The dialog resolves exactly two keys through this trait and does not know
//! or care how the strings are produced. The shipped implementation reads
//! them from the `[labels]` table of the config file; a host that localizes
//! its UI supplies its own implementation instead.

use crate::config::LabelsConfig;

/// Keys the dialog resolves through its label collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Ok,
    Cancel,
}

/// Resolves button captions by key.
pub trait LabelLookup {
    fn label(&self, key: LabelKey) -> String;
}

/// Labels backed by the `[labels]` section of the config file.
pub struct ConfigLabels {
    config: LabelsConfig,
}

impl ConfigLabels {
    pub fn new(config: LabelsConfig) -> Self {
        Self { config }
    }
}

impl LabelLookup for ConfigLabels {
    fn label(&self, key: LabelKey) -> String {
        match key {
            LabelKey::Ok => self.config.ok.clone(),
            LabelKey::Cancel => self.config.cancel.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = ConfigLabels::new(LabelsConfig::default());
        assert_eq!(labels.label(LabelKey::Ok), "OK");
        assert_eq!(labels.label(LabelKey::Cancel), "Cancel");
    }

    #[test]
    fn test_configured_labels() {
        let labels = ConfigLabels::new(LabelsConfig {
            ok: "Ja".to_string(),
            cancel: "Nein".to_string(),
        });
        assert_eq!(labels.label(LabelKey::Ok), "Ja");
        assert_eq!(labels.label(LabelKey::Cancel), "Nein");
    }
}
