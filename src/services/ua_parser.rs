use serde::Serialize;

/// Client details parsed from a User-Agent header, echoed by `/user-info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientInfo {
    pub browser: Option<String>,
    pub os: Option<String>,
    pub device_type: String,
}

// More specific patterns first; lookup is first-match on the lowercased UA.
const BROWSER_PATTERNS: &[(&str, &str)] = &[
    ("edg/", "Edge"),
    ("opr/", "Opera"),
    ("opera", "Opera"),
    ("firefox", "Firefox"),
    ("chrome", "Chrome"),
    ("safari", "Safari"),
];

const OS_PATTERNS: &[(&str, &str)] = &[
    ("windows phone", "Windows Phone"),
    ("windows nt", "Windows"),
    ("iphone os", "iOS"),
    ("ipad os", "iOS"),
    ("mac os x", "macOS"),
    ("android", "Android"),
    ("linux", "Linux"),
];

// Priority order: tablet > mobile > fallback.
const DEVICE_PATTERNS: &[(&str, &str)] = &[
    ("ipad", "tablet"),
    ("tablet", "tablet"),
    ("windows phone", "mobile"),
    ("iphone", "mobile"),
    ("mobile", "mobile"),
    ("android", "mobile"),
];

pub fn parse_user_agent(ua: &str) -> ClientInfo {
    let ua = ua.to_lowercase();

    let browser = first_match(BROWSER_PATTERNS, &ua);
    let os = first_match(OS_PATTERNS, &ua);

    let device_type = first_match(DEVICE_PATTERNS, &ua)
        .or_else(|| os.as_deref().and_then(device_for_os).map(str::to_string))
        .unwrap_or_else(|| "desktop".to_string());

    ClientInfo {
        browser,
        os,
        device_type,
    }
}

fn first_match(patterns: &[(&str, &str)], ua: &str) -> Option<String> {
    patterns
        .iter()
        .find(|(pattern, _)| ua.contains(pattern))
        .map(|(_, name)| (*name).to_string())
}

fn device_for_os(os: &str) -> Option<&'static str> {
    match os {
        "iOS" | "Android" | "Windows Phone" => Some("mobile"),
        _ => None,
    }
}
