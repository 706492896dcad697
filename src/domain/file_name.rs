/// Prefixes the dataset authors put in front of file names
pub const SANITIZATION_MARKERS: &[&str] = &["GRF_", "PRO_"];

/// Remove every literal, case-sensitive occurrence of the sanitization markers.
///
/// Repeats until nothing changes, so a marker spliced together by an earlier
/// removal (`"GRPRO_F_"`) is removed as well. Every pass shortens the name,
/// so this terminates.
pub fn sanitize_file_name(name: &str) -> String {
    let mut current = name.to_string();
    loop {
        let next = SANITIZATION_MARKERS
            .iter()
            .fold(current.clone(), |acc, marker| acc.replace(marker, ""));
        if next == current {
            return current;
        }
        current = next;
    }
}
