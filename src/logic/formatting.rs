//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

/// Format a decimal with at most two fractional digits, dropping trailing zeros
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_decimal;
///
/// assert_eq!(format_decimal(8.0), "8");
/// assert_eq!(format_decimal(2.8), "2.8");
/// assert_eq!(format_decimal(1.25), "1.25");
/// assert_eq!(format_decimal(3.14159), "3.14");
/// ```
pub fn format_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Format an aperture value as "f/N"
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_f_stop;
///
/// assert_eq!(format_f_stop(1.8), "f/1.8");
/// assert_eq!(format_f_stop(11.0), "f/11");
/// ```
pub fn format_f_stop(f_number: f64) -> String {
    format!("f/{}", format_decimal(f_number))
}

/// Format an exposure time given as a rational number of seconds
///
/// Exposures that reduce to a unit fraction are shown as `1/N`; everything else
/// as decimal seconds. Returns `None` for a zero numerator or denominator.
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_exposure;
///
/// assert_eq!(format_exposure(1, 250).as_deref(), Some("1/250s"));
/// assert_eq!(format_exposure(10, 2000).as_deref(), Some("1/200s"));
/// assert_eq!(format_exposure(3, 5).as_deref(), Some("0.6s"));
/// assert_eq!(format_exposure(8, 10).as_deref(), Some("0.8s"));
/// assert_eq!(format_exposure(2, 1).as_deref(), Some("2s"));
/// assert_eq!(format_exposure(3, 2).as_deref(), Some("1.5s"));
/// assert_eq!(format_exposure(1, 0), None);
/// ```
pub fn format_exposure(num: u32, denom: u32) -> Option<String> {
    if denom == 0 || num == 0 {
        return None;
    }

    if num < denom && denom % num == 0 {
        return Some(format!("1/{}s", denom / num));
    }

    Some(format!("{}s", format_decimal(num as f64 / denom as f64)))
}

/// Format a focal length in millimetres
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_focal_length;
///
/// assert_eq!(format_focal_length(50.0), "50mm");
/// assert_eq!(format_focal_length(4.25), "4.25mm");
/// ```
pub fn format_focal_length(mm: f64) -> String {
    format!("{}mm", format_decimal(mm))
}

/// Format bytes into a human-readable size
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(2048), "2.0 KB");
/// assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
/// ```
pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Folder title shown next to the breadcrumb: name plus what the view lists
///
/// # Examples
/// ```
/// use photodeck::logic::formatting::format_folder_title;
///
/// assert_eq!(format_folder_title("Trips", 3, 120), "Trips  items : 123");
/// ```
pub fn format_folder_title(name: &str, folder_count: usize, image_count: usize) -> String {
    format!("{}  items : {}", name, folder_count + image_count)
}
