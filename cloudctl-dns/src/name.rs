//! Zone-relative name helpers.

/// Strip the trailing dot from a zone or record name.
pub fn normalize_zone_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a fully qualified name to a zone-relative one.
/// e.g. "www.example.com" + "example.com" -> "www"
/// e.g. "example.com" + "example.com" -> "@"
pub fn fqdn_to_relative(fqdn: &str, zone_name: &str) -> String {
    let full = normalize_zone_name(fqdn);
    let zone = normalize_zone_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(relative) = full.strip_suffix(&format!(".{zone}")) {
        relative.to_string()
    } else {
        full
    }
}

/// Convert a zone-relative name to a fully qualified one.
/// e.g. "www" + "example.com" -> "www.example.com"
/// e.g. "@" + "example.com" -> "example.com"
pub fn relative_to_fqdn(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_zone_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_dot() {
        assert_eq!(normalize_zone_name("example.com."), "example.com");
        assert_eq!(normalize_zone_name("example.com"), "example.com");
    }

    #[test]
    fn fqdn_to_relative_subdomain() {
        assert_eq!(fqdn_to_relative("www.example.com", "example.com"), "www");
        assert_eq!(
            fqdn_to_relative("a.b.example.com.", "example.com."),
            "a.b"
        );
    }

    #[test]
    fn fqdn_to_relative_apex() {
        assert_eq!(fqdn_to_relative("example.com", "example.com"), "@");
        assert_eq!(fqdn_to_relative("example.com.", "example.com"), "@");
    }

    #[test]
    fn fqdn_to_relative_passes_through_foreign_names() {
        // Already-relative or out-of-zone names are left unchanged.
        assert_eq!(fqdn_to_relative("www", "example.com"), "www");
        assert_eq!(fqdn_to_relative("other.net", "example.com"), "other.net");
    }

    #[test]
    fn relative_to_fqdn_subdomain() {
        assert_eq!(relative_to_fqdn("www", "example.com"), "www.example.com");
    }

    #[test]
    fn relative_to_fqdn_apex() {
        assert_eq!(relative_to_fqdn("@", "example.com"), "example.com");
        assert_eq!(relative_to_fqdn("", "example.com"), "example.com");
    }

    #[test]
    fn relative_fqdn_round_trip() {
        let fqdn = relative_to_fqdn("mail", "example.com");
        assert_eq!(fqdn_to_relative(&fqdn, "example.com"), "mail");
    }
}
