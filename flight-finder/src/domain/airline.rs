//! Airline display names.

/// Korean display name for an IATA airline code.
///
/// Unlike airport codes, airline codes may contain digits ("7C" is Jeju
/// Air), so they stay plain strings. Codes missing from the table pass
/// through verbatim.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::airline_display_name;
///
/// assert_eq!(airline_display_name("KE"), "대한항공(KE)");
/// assert_eq!(airline_display_name("7C"), "제주항공(7C)");
/// assert_eq!(airline_display_name("??"), "??");
/// ```
pub fn airline_display_name(code: &str) -> &str {
    match code {
        "ZE" => "이스타항공(ZE)",
        "NH" => "전일본공수/ANA(NH)",
        "KE" => "대한항공(KE)",
        "LJ" => "진에어(LJ)",
        "OZ" => "아시아나항공(OZ)",
        "7C" => "제주항공(7C)",
        "MU" => "중국동방항공(MU)",
        "TW" => "티웨이항공(TW)",
        "SC" => "산동항공(SC)",
        "BX" => "에어부산(BX)",
        "FM" => "상하이항공(FM)",
        "VN" => "베트남항공(VN)",
        "CA" => "중국국제항공(CA)",
        "JL" => "일본항공(JL)",
        "SQ" => "싱가포르항공(SQ)",
        "TG" => "타이항공(TG)",
        "CX" => "캐세이퍼시픽(CX)",
        "UA" => "유나이티드항공(UA)",
        "AA" => "아메리칸항공(AA)",
        "DL" => "델타항공(DL)",
        "AF" => "에어프랑스(AF)",
        "LH" => "루프트한자(LH)",
        "EK" => "에미레이트항공(EK)",
        "QR" => "카타르항공(QR)",
        "BA" => "브리티시 에어웨이즈(BA)",
        "TK" => "터키항공(TK)",
        "ET" => "에티하드항공(ET)",
        other => other,
    }
}
