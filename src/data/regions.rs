use crate::models::category::IndianState;
use crate::models::language::Localized;

const fn state(
    code: &'static str,
    name: Localized,
    jobs: u32,
    is_trending: bool,
) -> IndianState {
    IndianState {
        code,
        name,
        jobs,
        is_trending,
    }
}

pub static INDIAN_STATES: [IndianState; 28] = [
    state("AP", Localized::new("Andhra Pradesh", "आंध्र प्रदेश", "ఆంధ్రప్రదేశ్"), 245, false),
    state("AS", Localized::new("Assam", "असम", "అస్సాం"), 189, false),
    state("BR", Localized::new("Bihar", "बिहार", "బిహార్"), 567, true),
    state("CG", Localized::new("Chhattisgarh", "छत्तीसगढ़", "ఛత్తీస్‌గఢ్"), 178, false),
    state("DL", Localized::new("Delhi", "दिल्ली", "ఢిల్లీ"), 423, true),
    state("GA", Localized::new("Goa", "गोवा", "గోవా"), 89, false),
    state("GJ", Localized::new("Gujarat", "गुजरात", "గుజరాత్"), 334, false),
    state("HR", Localized::new("Haryana", "हरियाणा", "హర్యానా"), 298, false),
    state("HP", Localized::new("Himachal Pradesh", "हिमाचल प्रदेश", "హిమాచల్ ప్రదేశ్"), 145, false),
    state("JH", Localized::new("Jharkhand", "झारखंड", "జార్ఖండ్"), 201, false),
    state("KA", Localized::new("Karnataka", "कर्नाटक", "కర్ణాటక"), 412, true),
    state("KL", Localized::new("Kerala", "केरल", "కేరళ"), 267, false),
    state("MP", Localized::new("Madhya Pradesh", "मध्य प्रदेश", "మధ్యప్రదేశ్"), 389, false),
    state("MH", Localized::new("Maharashtra", "महाराष्ट्र", "మహారాష్ట్ర"), 678, true),
    state("MN", Localized::new("Manipur", "मणिपुर", "మణిపూర్"), 76, false),
    state("ML", Localized::new("Meghalaya", "मेघालय", "మేఘాలయ"), 67, false),
    state("MZ", Localized::new("Mizoram", "मिजोरम", "మిజోరం"), 54, false),
    state("NL", Localized::new("Nagaland", "नागालैंड", "నాగాలాండ్"), 62, false),
    state("OD", Localized::new("Odisha", "ओडिशा", "ఒడిశా"), 234, false),
    state("PB", Localized::new("Punjab", "पंजाब", "పంజాబ్"), 287, false),
    state("RJ", Localized::new("Rajasthan", "राजस्थान", "రాజస్థాన్"), 456, true),
    state("SK", Localized::new("Sikkim", "सिक्किम", "సిక్కిం"), 43, false),
    state("TN", Localized::new("Tamil Nadu", "तमिल नाडु", "తమిళనాడు"), 523, false),
    state("TS", Localized::new("Telangana", "तेलंगाना", "తెలంగాణ"), 398, true),
    state("TR", Localized::new("Tripura", "त्रिपुरा", "త్రిపుర"), 78, false),
    state("UK", Localized::new("Uttarakhand", "उत्तराखंड", "ఉత్తరాఖండ్"), 156, false),
    state("UP", Localized::new("Uttar Pradesh", "उत्तर प्रदेश", "ఉత్తరప్రదేశ్"), 789, true),
    state("WB", Localized::new("West Bengal", "पश्चिम बंगाल", "పశ్చిమ బెంగాల్"), 445, false),
];

pub fn find(code: &str) -> Option<&'static IndianState> {
    INDIAN_STATES.iter().find(|s| s.code.eq_ignore_ascii_case(code))
}

pub fn total_jobs() -> u32 {
    INDIAN_STATES.iter().map(|s| s.jobs).sum()
}
