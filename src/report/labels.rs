// src/report/labels.rs
//! Localized UI strings for the report view

use serde::{Deserialize, Serialize};

/// Languages a report can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Gujarati,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Gujarati];

    /// Parse a declared language code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "hindi" | "hi" => Some(Self::Hindi),
            "gujarati" | "gu" => Some(Self::Gujarati),
            _ => None,
        }
    }

    /// Parse with the English fallback applied.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Gujarati => "gujarati",
        }
    }

    pub fn labels(self) -> &'static LabelSet {
        match self {
            Self::English => &ENGLISH,
            Self::Hindi => &HINDI,
            Self::Gujarati => &GUJARATI,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub back: &'static str,
    pub back_to_reports: &'static str,
    pub header_title: &'static str,
    pub header_subtitle: &'static str,
    pub basic_details: &'static str,
    pub personality: &'static str,
    pub career: &'static str,
    pub avoid: &'static str,
    pub marriage: &'static str,
    pub remedies: &'static str,
    pub summary: &'static str,
    pub colors: &'static str,
    pub habits: &'static str,
    pub industries: &'static str,
    pub no_data: &'static str,
}

static ENGLISH: LabelSet = LabelSet {
    back: "← Back",
    back_to_reports: "← Back to Reports",
    header_title: "🔮 AI Astrovaani Report",
    header_subtitle: "Your personalized Vedic analysis",
    basic_details: "👤 Basic Details",
    personality: "🧿 Personality",
    career: "💼 Best Career Options",
    avoid: "⚠️ Things to Avoid",
    marriage: "💍 Marriage Prediction",
    remedies: "🪬 Remedies",
    summary: "📜 Summary",
    colors: "Colors",
    habits: "Habits",
    industries: "Industries",
    no_data: "No data available",
};

static HINDI: LabelSet = LabelSet {
    back: "← Back",
    back_to_reports: "← Back to Reports",
    header_title: "🔮 AI Astrovaani Report",
    header_subtitle: "आपका व्यक्तिगत वैदिक विश्लेषण",
    basic_details: "👤 बुनियादी जानकारी",
    personality: "🧿 व्यक्तित्व",
    career: "💼 श्रेष्ठ करियर विकल्प",
    avoid: "⚠️ बचें ये चीज़ें",
    marriage: "💍 विवाह की भविष्यवाणी",
    remedies: "🪬 उपाय",
    summary: "📜 सारांश",
    colors: "रंग",
    habits: "आदतें",
    industries: "उद्योग",
    no_data: "कोई डेटा उपलब्ध नहीं",
};

static GUJARATI: LabelSet = LabelSet {
    back: "← Back",
    back_to_reports: "← Back to Reports",
    header_title: "🔮 AI Astrovaani Report",
    header_subtitle: "તમારો વ્યક્તિગત વૈદિક વિશ્લેષણ",
    basic_details: "👤 મૂળભૂત વિગતો",
    personality: "🧿 વ્યક્તિત્વ",
    career: "💼 શ્રેષ્ઠ કરિયર વિકલ્પો",
    avoid: "⚠️ ટાળવા જેવી વસ્તુઓ",
    marriage: "💍 લગ્નની ભવિષ્યવાણી",
    remedies: "🪬 ઉપાય",
    summary: "📜 સારાંશ",
    colors: "રંગો",
    habits: "આદતો",
    industries: "ઉદ્યોગો",
    no_data: "કોઈ ડેટા ઉપલબ્ધ નથી",
};

/// Look up the label table for a declared language code.
///
/// Total: anything unrecognized, including a missing code, gets English.
pub fn resolve_labels(code: Option<&str>) -> &'static LabelSet {
    Language::resolve(code).labels()
}
