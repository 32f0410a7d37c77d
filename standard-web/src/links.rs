//! Outbound link builders for contact actions.
//!
//! Inquiries route through the visitor's own mail client, so every call to
//! action on the site is a `mailto:` or `tel:` URL built here.

/// Prefilled subject for founding guest inquiries.
pub const FOUNDING_GUEST_SUBJECT: &str = "Founding Guest Inquiry — THE STANDARD";
/// Prefilled subject for sponsorship inquiries.
pub const SPONSOR_SUBJECT: &str = "Confidential Sponsor Inquiry — THE STANDARD";
/// Prefilled subject for press and media inquiries.
pub const MEDIA_SUBJECT: &str = "Media Inquiry — THE STANDARD";

/// Plain `mailto:` URL with no prefilled subject.
pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}

/// `mailto:` URL with a percent-encoded subject line.
pub fn mailto_with_subject(email: &str, subject: &str) -> String {
    format!("mailto:{email}?subject={}", urlencoding::encode(subject))
}

/// `tel:` URL from a display-formatted phone number.
///
/// Keeps digits and a leading `+`; punctuation and spacing used for display
/// never belong in the dial string.
pub fn tel_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_without_subject_is_plain() {
        assert_eq!(mailto_url("a@b.com"), "mailto:a@b.com");
    }

    #[test]
    fn mailto_subject_is_percent_encoded() {
        let url = mailto_with_subject("Partnerships@TheStandardSeries.com", FOUNDING_GUEST_SUBJECT);
        assert_eq!(
            url,
            "mailto:Partnerships@TheStandardSeries.com?subject=Founding%20Guest%20Inquiry%20%E2%80%94%20THE%20STANDARD"
        );
    }

    #[test]
    fn tel_strips_display_formatting() {
        // The display number uses a non-breaking hyphen, which must not
        // survive into the dial string.
        assert_eq!(tel_url("(240) 946‑0774"), "tel:2409460774");
    }

    #[test]
    fn tel_keeps_leading_plus() {
        assert_eq!(tel_url("+1 (240) 946-0774"), "tel:+12409460774");
    }
}
