use std::cmp::Ordering;

use anyhow::Context;
use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::Locale;

use crate::application::ports::title_collation::TitleCollation;

/// ICU-backed title comparison for a BCP-47 locale (for example `"zh"` for
/// pinyin-ordered Chinese). Immutable after construction; shared freely
/// between tasks.
pub struct IcuTitleCollation {
    collator: Collator,
}

impl IcuTitleCollation {
    pub fn new(locale: &str) -> anyhow::Result<Self> {
        let parsed: Locale = locale
            .parse()
            .with_context(|| format!("invalid collation locale {locale:?}"))?;
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&parsed.into(), options)
            .map_err(|e| anyhow::anyhow!("no collation data for locale {locale:?}: {e}"))?;
        Ok(Self { collator })
    }
}

impl TitleCollation for IcuTitleCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}
