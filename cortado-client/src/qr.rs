//! Guest QR deep links
//!
//! Each table's QR code encodes the guest menu URL for that table. Image
//! rendering is delegated to a public QR image service; this module only
//! builds the URLs.

/// Public QR image service endpoint
const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Guest menu deep link for a table
pub fn menu_url(app_base: &str, table_id: &str) -> String {
    format!("{}/table/{}/menu", app_base.trim_end_matches('/'), table_id)
}

/// QR image URL rendering the given deep link
pub fn qr_image_url(target: &str, size: u32) -> String {
    let url = reqwest::Url::parse_with_params(
        QR_SERVICE,
        &[
            ("size", format!("{}x{}", size, size)),
            ("data", target.to_string()),
        ],
    )
    .expect("QR service base URL is valid");
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_url() {
        assert_eq!(
            menu_url("https://cafe.example/", "t-12"),
            "https://cafe.example/table/t-12/menu"
        );
    }

    #[test]
    fn test_qr_image_url_encodes_target() {
        let url = qr_image_url("https://cafe.example/table/t-12/menu", 300);
        assert!(url.starts_with(QR_SERVICE));
        assert!(url.contains("size=300x300"));
        // The deep link must be percent-encoded into the data parameter
        assert!(url.contains("data=https%3A%2F%2Fcafe.example%2Ftable%2Ft-12%2Fmenu"));
    }
}
