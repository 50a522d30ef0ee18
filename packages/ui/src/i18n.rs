//! Translation table.
//!
//! Each supported language carries a flat bundle of `key → text` pairs. Views
//! look strings up through [`Language::text`], which falls back to the English
//! text when a bundle lacks a key, so a missing translation never blanks out a
//! label.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "gu")]
    Gujarati,
    #[serde(rename = "or")]
    Odia,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Gujarati,
        Language::Odia,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Gujarati => "gu",
            Language::Odia => "or",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language in its own script, for the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Bengali => "বাংলা",
            Language::Gujarati => "ગુજરાતી",
            Language::Odia => "ଓଡ଼ିଆ",
        }
    }

    fn bundle(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => EN,
            Language::Hindi => HI,
            Language::Bengali => BN,
            Language::Gujarati => GU,
            Language::Odia => OR,
        }
    }

    /// The bundle entry for `key`, if this language has one.
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        self.bundle()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .filter(|text| !text.is_empty())
    }

    /// Display text for `key`: this language, then English, then the key itself.
    pub fn text(self, key: &'static str) -> &'static str {
        self.lookup(key)
            .or_else(|| Language::English.lookup(key))
            .unwrap_or(key)
    }
}

/// Every key the views translate.
pub fn keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|(k, _)| *k)
}

const EN: &[(&str, &str)] = &[
    ("appName", "Digi-रक्षा"),
    ("appSubtitle", "An Initiative by the Government of India"),
    ("sos", "SOS"),
    ("markMe", "Mark Me"),
    ("safe", "Safe"),
    ("yourLocation", "Your Location"),
    ("potentialRisks", "Potential Risks:"),
    ("communityTitle", "Community Feed"),
    ("newPost", "New Post"),
    ("submitPost", "Submit Post"),
    ("announcements", "Announcements"),
    ("helpRequests", "Help Requests"),
    ("alertsTitle", "Alerts & Warnings"),
    ("missingPersonsTitle", "Missing Persons Registry"),
    ("nearbySos", "Nearby SOS Calls"),
    ("familyStatus", "Family Status"),
    ("searchRegistry", "Search Registry"),
    ("reportMissing", "Report Missing"),
    ("submitReport", "Submit Report"),
    ("navHome", "Home"),
    ("navAlerts", "Alerts"),
    ("navCommunity", "Community"),
    ("navMissing", "Missing"),
    ("reportIncident", "Report Incident"),
    ("takePhoto", "Take Photo"),
    ("recordAudio", "Record Audio"),
    ("shareLocation", "Share Location"),
    ("reportIncidentTitle", "Report an Incident"),
    ("incidentType", "Select Incident Type..."),
    ("incidentDescription", "Describe the incident..."),
    ("attachPhoto", "Attach Photo"),
    ("incidentLocation", "Location (e.g., street name, landmark)"),
    ("submitIncident", "Submit Incident Report"),
    ("addFamilyTitle", "Add Family Member"),
    ("newMemberNamePlaceholder", "Full Name"),
    ("addMemberBtn", "Add Member"),
];

const HI: &[(&str, &str)] = &[
    ("appName", "डिजी-रक्षा"),
    ("appSubtitle", "भारत सरकार की एक पहल"),
    ("sos", "मदद"),
    ("markMe", "मुझे"),
    ("safe", "सुरक्षित करें"),
    ("yourLocation", "आपका स्थान"),
    ("potentialRisks", "संभावित खतरे:"),
    ("communityTitle", "कम्युनिटी फीड"),
    ("newPost", "नई पोस्ट"),
    ("submitPost", "पोस्ट सबमिट करें"),
    ("announcements", "घोषणाएं"),
    ("helpRequests", "सहायता अनुरोध"),
    ("alertsTitle", "चेतावनी और सूचनाएं"),
    ("missingPersonsTitle", "लापता व्यक्ति रजिस्ट्री"),
    ("nearbySos", "आस-पास के एसओएस कॉल"),
    ("familyStatus", "परिवार की स्थिति"),
    ("searchRegistry", "रजिस्ट्री खोजें"),
    ("reportMissing", "लापता की रिपोर्ट करें"),
    ("submitReport", "रिपोर्ट सबमिट करें"),
    ("navHome", "होम"),
    ("navAlerts", "चेतावनी"),
    ("navCommunity", "समुदाय"),
    ("navMissing", "लापता"),
    ("reportIncident", "घटना की रिपोर्ट करें"),
    ("takePhoto", "फोटो लें"),
    ("recordAudio", "ऑडियो रिकॉर्ड करें"),
    ("shareLocation", "स्थान साझा करें"),
    ("reportIncidentTitle", "एक घटना की रिपोर्ट करें"),
    ("incidentType", "घटना का प्रकार चुनें..."),
    ("incidentDescription", "घटना का वर्णन करें..."),
    ("attachPhoto", "फोटो संलग्न करें"),
    ("incidentLocation", "स्थान (उदा. गली का नाम, लैंडमार्क)"),
    ("submitIncident", "घटना रिपोर्ट सबमिट करें"),
    ("addFamilyTitle", "परिवार का सदस्य जोड़ें"),
    ("newMemberNamePlaceholder", "पूरा नाम"),
    ("addMemberBtn", "सदस्य जोड़ें"),
];

const BN: &[(&str, &str)] = &[
    ("appName", "ডিজি-রক্ষা"),
    ("appSubtitle", "ভারত সরকারের একটি উদ্যোগ"),
    ("sos", "SOS"),
    ("markMe", "আমাকে"),
    ("safe", "নিরাপদ করুন"),
    ("yourLocation", "আপনার অবস্থান"),
    ("potentialRisks", "সম্ভাব্য ঝুঁকি:"),
    ("communityTitle", "কমিউনিটি ফিড"),
    ("newPost", "নতুন পোস্ট"),
    ("submitPost", "পোস্ট জমা দিন"),
    ("announcements", "ঘোষণা"),
    ("helpRequests", "সাহায্যের অনুরোধ"),
    ("alertsTitle", "সতর্কতা এবং বিজ্ঞপ্তি"),
    ("missingPersonsTitle", "নিখোঁজ ব্যক্তি রেজিস্ট্রি"),
    ("nearbySos", "কাছাকাছি এসওএস কল"),
    ("familyStatus", "পরিবারের অবস্থা"),
    ("searchRegistry", "রেজিস্ট্রি অনুসন্ধান করুন"),
    ("reportMissing", "নিখোঁজ রিপোর্ট করুন"),
    ("submitReport", "রিপোর্ট জমা দিন"),
    ("navHome", "হোম"),
    ("navAlerts", "সতর্কতা"),
    ("navCommunity", "কমিউনিটি"),
    ("navMissing", "নিখোঁজ"),
    ("reportIncident", "ঘটনা রিপোর্ট করুন"),
    ("takePhoto", "ছবি তুলুন"),
    ("recordAudio", "অডিও রেকর্ড করুন"),
    ("shareLocation", "অবস্থান শেয়ার করুন"),
    ("reportIncidentTitle", "একটি ঘটনা রিপোর্ট করুন"),
    ("incidentType", "ঘটনার ধরন নির্বাচন করুন..."),
    ("incidentDescription", "ঘটনাটি বর্ণনা করুন..."),
    ("attachPhoto", "ছবি সংযুক্ত করুন"),
    ("incidentLocation", "অবস্থান (যেমন রাস্তার নাম, ল্যান্ডমার্ক)"),
    ("submitIncident", "ঘটনা রিপোর্ট জমা দিন"),
    ("addFamilyTitle", "পরিবারের সদস্য যোগ করুন"),
    ("newMemberNamePlaceholder", "পুরো নাম"),
    ("addMemberBtn", "সদস্য যোগ করুন"),
];

const GU: &[(&str, &str)] = &[
    ("appName", "ડિજિ-રક્ષા"),
    ("appSubtitle", "ભારત સરકારની એક પહેલ"),
    ("sos", "SOS"),
    ("markMe", "મને"),
    ("safe", "સુરક્ષિત કરો"),
    ("yourLocation", "તમારું સ્થાન"),
    ("potentialRisks", "સંભવિત જોખમો:"),
    ("communityTitle", "કમ્યુનિટિ ફીડ"),
    ("newPost", "નવી પોસ્ટ"),
    ("submitPost", "પોસ્ટ સબમિટ કરો"),
    ("announcements", "જાહેરાતો"),
    ("helpRequests", "મદદ માટે વિનંતીઓ"),
    ("alertsTitle", "ચેતવણીઓ અને સૂચનાઓ"),
    ("missingPersonsTitle", "ગુમ થયેલ વ્યક્તિઓની રજિસ્ટ્રી"),
    ("nearbySos", "નજીકના એસઓએસ કોલ્સ"),
    ("familyStatus", "કૌટુંબિક સ્થિતિ"),
    ("searchRegistry", "રજિસ્ટ્રી શોધો"),
    ("reportMissing", "ગુમ થયાની જાણ કરો"),
    ("submitReport", "રિપોર્ટ સબમિટ કરો"),
    ("navHome", "હોમ"),
    ("navAlerts", "ચેતવણીઓ"),
    ("navCommunity", "કમ્યુનિટિ"),
    ("navMissing", "ગુમ થયેલ"),
    ("reportIncident", "ઘટનાની જાણ કરો"),
    ("takePhoto", "ફોટો લો"),
    ("recordAudio", "ઓડિયો રેકોર્ડ કરો"),
    ("shareLocation", "સ્થાન શેર કરો"),
    ("reportIncidentTitle", "એક ઘટનાની જાણ કરો"),
    ("incidentType", "ઘટનાનો પ્રકાર પસંદ કરો..."),
    ("incidentDescription", "ઘટનાનું વર્ણન કરો..."),
    ("attachPhoto", "ફોટો જોડો"),
    ("incidentLocation", "સ્થાન (દા.ત. શેરીનું નામ, સીમાચિહ્ન)"),
    ("submitIncident", "ઘટના અહેવાલ સબમિટ કરો"),
    ("addFamilyTitle", "પરિવારના સભ્યને ઉમેરો"),
    ("newMemberNamePlaceholder", "પૂરું નામ"),
    ("addMemberBtn", "સભ્ય ઉમેરો"),
];

const OR: &[(&str, &str)] = &[
    ("appName", "ଡିଜି-ରକ୍ଷା"),
    ("appSubtitle", "ଭାରତ ସରକାରଙ୍କ ଏକ ପଦକ୍ଷେପ"),
    ("sos", "SOS"),
    ("markMe", "ମୋତେ"),
    ("safe", "ସୁରକ୍ଷିତ କରନ୍ତୁ"),
    ("yourLocation", "ଆପଣଙ୍କ ସ୍ଥାନ"),
    ("potentialRisks", "ସମ୍ଭାବ୍ୟ ବିପଦ:"),
    ("communityTitle", "କମ୍ୟୁନିଟି ଫିଡ୍"),
    ("newPost", "ନୂଆ ପୋଷ୍ଟ"),
    ("submitPost", "ପୋଷ୍ଟ ଦାଖଲ କରନ୍ତୁ"),
    ("announcements", "ଘୋଷଣା"),
    ("helpRequests", "ସାହାଯ୍ୟ ଅନୁରୋଧ"),
    ("alertsTitle", "ସତର୍କତା ଏବଂ ଚେତାବନୀ"),
    ("missingPersonsTitle", "ନିଖୋଜ ବ୍ୟକ୍ତିଙ୍କ ରେଜିଷ୍ଟ୍ରି"),
    ("nearbySos", "ନିକଟବର୍ତ୍ତୀ SOS କଲ୍"),
    ("familyStatus", "ପରିବାର ସ୍ଥିତି"),
    ("searchRegistry", "ରେଜିଷ୍ଟ୍ରି ଖୋଜନ୍ତୁ"),
    ("reportMissing", "ନିଖୋଜ ରିପୋର୍ଟ କରନ୍ତୁ"),
    ("submitReport", "ରିପୋର୍ଟ ଦାଖଲ କରନ୍ତୁ"),
    ("navHome", "ହୋମ୍"),
    ("navAlerts", "ସତର୍କତା"),
    ("navCommunity", "କମ୍ୟୁନିଟି"),
    ("navMissing", "ନିଖୋଜ"),
    ("reportIncident", "ଘଟଣା ରିପୋର୍ଟ କରନ୍ତୁ"),
    ("takePhoto", "ଫଟୋ ନିଅନ୍ତୁ"),
    ("recordAudio", "ଅଡିଓ ରେକର୍ଡ କରନ୍ତୁ"),
    ("shareLocation", "ଅବସ୍ଥାନ ସେୟାର କରନ୍ତୁ"),
    ("reportIncidentTitle", "ଏକ ଘଟଣା ରିପୋର୍ଟ କରନ୍ତୁ"),
    ("incidentType", "ଘଟଣାର ପ୍ରକାର ଚୟନ କରନ୍ତୁ..."),
    ("incidentDescription", "ଘଟଣା ବର୍ଣ୍ଣନା କରନ୍ତୁ..."),
    ("attachPhoto", "ଫଟୋ ସଂଲଗ୍ନ କରନ୍ତୁ"),
    ("incidentLocation", "ଅବସ୍ଥାନ (ଯଥା, ରାସ୍ତା ନାମ, ସ୍ଥାନ ଚିହ୍ନ)"),
    ("submitIncident", "ଘଟଣା ରିପୋର୍ଟ ଦାଖଲ କରନ୍ତୁ"),
    ("addFamilyTitle", "ପରିବାର ସଦସ୍ୟ ଯୋଗ କରନ୍ତୁ"),
    ("newMemberNamePlaceholder", "ପୂରା ନାମ"),
    ("addMemberBtn", "ସଦସ୍ୟ ଯୋଗ କରନ୍ତୁ"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_covers_every_key() {
        for lang in Language::ALL {
            for key in keys() {
                let text = lang.lookup(key);
                assert!(
                    text.is_some_and(|t| !t.is_empty()),
                    "{} is missing {key}",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_absent_key_is_skipped() {
        for lang in Language::ALL {
            assert_eq!(lang.lookup("noSuchKey"), None);
            assert_eq!(lang.text("noSuchKey"), "noSuchKey");
        }
    }

    #[test]
    fn test_lookup_uses_selected_bundle() {
        assert_eq!(Language::Hindi.text("sos"), "मदद");
        assert_eq!(Language::Bengali.text("navHome"), "হোম");
        assert_eq!(Language::English.text("addMemberBtn"), "Add Member");
    }

    #[test]
    fn test_codes_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::English);
    }
}
