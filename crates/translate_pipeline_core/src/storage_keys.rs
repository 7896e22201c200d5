/// Destination key for a translated object: `{target_language_code}/{object_key}`.
///
/// The source key is used verbatim, path separators included.
pub fn translated_object_key(target_language_code: &str, object_key: &str) -> String {
    format!("{target_language_code}/{object_key}")
}

pub fn object_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// Output folder for converted audio. The source key's directory is mirrored
/// below `output_prefix`; the converter names the file after the input.
pub fn media_destination_uri(
    destination_bucket: &str,
    output_prefix: &str,
    source_key: &str,
) -> String {
    let mut segments = Vec::new();
    let prefix = output_prefix.trim_matches('/');
    if !prefix.is_empty() {
        segments.push(prefix);
    }
    if let Some((directory, _)) = source_key.rsplit_once('/') {
        let directory = directory.trim_matches('/');
        if !directory.is_empty() {
            segments.push(directory);
        }
    }

    if segments.is_empty() {
        format!("s3://{destination_bucket}/")
    } else {
        format!("s3://{destination_bucket}/{}/", segments.join("/"))
    }
}

pub fn is_mp4_key(key: &str) -> bool {
    let file_name = key.rsplit('/').next().unwrap_or(key);
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, extension)| {
            !stem.is_empty() && extension.eq_ignore_ascii_case("mp4")
        })
}
