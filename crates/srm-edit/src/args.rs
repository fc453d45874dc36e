//! Field inputs from the command line and profile files

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::BoolishValueParser;
use log::debug;

use srm_core::{FieldInputs, FieldName, RawValue};

/// Field values. Flags override values read from the profile.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// JSON profile with field values (defaults to the user config profile if present)
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<PathBuf>,

    /// Arrows, 0-30
    #[arg(long)]
    pub arrows: Option<String>,

    /// Bombs, 0-5
    #[arg(long)]
    pub bombs: Option<String>,

    /// Rupees, 0-250
    #[arg(long)]
    pub rupees: Option<String>,

    /// Heart count before the sanctuary heart
    #[arg(long = "hps-without")]
    pub hps_without: Option<String>,

    /// Start with the sanctuary heart collected
    #[arg(long = "sanc-heart", value_parser = BoolishValueParser::new())]
    pub sanc_heart: Option<bool>,

    /// Heart refill flag
    #[arg(long = "heart-refill", value_parser = BoolishValueParser::new())]
    pub heart_refill: Option<bool>,

    /// Start with the bug net
    #[arg(long = "bug-net", value_parser = BoolishValueParser::new())]
    pub bug_net: Option<bool>,

    /// mushroom, powder, or anything else for none
    #[arg(long)]
    pub mushroom: Option<String>,

    /// Tavern chest bottle: none, empty, red, fairy, bee
    #[arg(long = "tavern-bottle")]
    pub tavern_bottle: Option<String>,

    /// Vendor bottle: none, empty, red, fairy, bee
    #[arg(long = "vendor-bottle")]
    pub vendor_bottle: Option<String>,
}

impl InputArgs {
    /// Merge the flags over `base`, which usually came from a profile
    pub fn apply(&self, base: &mut FieldInputs) {
        let text_fields = [
            (FieldName::Arrows, &self.arrows),
            (FieldName::Bombs, &self.bombs),
            (FieldName::Rupees, &self.rupees),
            (FieldName::Mushroom, &self.mushroom),
            (FieldName::TavernBottle, &self.tavern_bottle),
            (FieldName::VendorBottle, &self.vendor_bottle),
        ];
        for (name, value) in text_fields {
            if let Some(v) = value {
                base.insert(name, v.as_str());
            }
        }

        let flag_fields = [
            (FieldName::HeartRefill, self.heart_refill),
            (FieldName::BugNet, self.bug_net),
        ];
        for (name, value) in flag_fields {
            if let Some(v) = value {
                base.insert(name, v);
            }
        }

        if self.hps_without.is_some() || self.sanc_heart.is_some() {
            let (profile_base, profile_checked) = match base.get(FieldName::SancHeart.as_ref()) {
                Some(RawValue::Heart {
                    hps_without,
                    checked,
                }) => (Some((**hps_without).clone()), *checked),
                _ => (None, false),
            };
            let hps_without = self
                .hps_without
                .as_deref()
                .map(RawValue::from)
                .or(profile_base);
            match hps_without {
                Some(h) => base.insert(
                    FieldName::SancHeart,
                    RawValue::heart(h, self.sanc_heart.unwrap_or(profile_checked)),
                ),
                None => debug!("--sanc-heart given without a base heart count"),
            }
        }
    }

    /// Profile values (if any) with the flags layered on top
    pub fn collect(&self) -> Result<FieldInputs> {
        let mut inputs = match &self.profile {
            Some(path) => srm_save::load_profile(path)
                .with_context(|| format!("Unable to load profile {}", path.display()))?,
            None => {
                let path = srm_save::default_profile_path();
                if path.exists() {
                    debug!("using default profile {}", path.display());
                    srm_save::load_profile(&path)
                        .with_context(|| format!("Unable to load profile {}", path.display()))?
                } else {
                    FieldInputs::new()
                }
            }
        };
        self.apply(&mut inputs);
        Ok(inputs)
    }
}
