use crate::common::*;

use crate::enums::compose_error::*;

use crate::model::compose_request::*;

#[doc = "toml 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 toml 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error> - 성공적으로 파일을 읽었을 경우에는 역직렬화된 객체를 반환해준다.
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Function that reads a json file and deserializes it"]
pub fn read_json_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let json_content: String = std::fs::read_to_string(file_path)?;
    let json: T = serde_json::from_str(&json_content)?;

    Ok(json)
}

#[doc = "Reads a compose request, choosing the parser from the file extension"]
/// # Arguments
/// * `file_path` - `.toml` or `.json` request file
///
/// # Returns
/// * `anyhow::Result<ComposeRequest>` - the parsed request, or an error naming the file
pub fn read_compose_request(file_path: &Path) -> anyhow::Result<ComposeRequest> {
    let path_str: &str = file_path
        .to_str()
        .ok_or_else(|| anyhow!("[io_utils -> read_compose_request] non UTF-8 path: {:?}", file_path))?;

    let extension: String = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let request: ComposeRequest = match extension.as_str() {
        "toml" => read_toml_from_file::<ComposeRequest>(path_str),
        "json" => read_json_from_file::<ComposeRequest>(path_str),
        _ => return Err(ComposeError::UnsupportedRequestFormat(path_str.to_string()).into()),
    }
    .with_context(|| format!("[io_utils -> read_compose_request] failed to read '{}'", path_str))?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::{language::*, template_type::*};

    use std::io::Write;

    fn temp_with(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn reads_toml_requests() {
        let file = temp_with(
            ".toml",
            "template = \"examNotice\"\nlanguage = \"en\"\ntags = [\"A+\"]\n\n[fields]\nsubject = \"Math\"\n",
        );

        let request: ComposeRequest = read_compose_request(file.path()).unwrap();

        assert_eq!(request.template, TemplateType::ExamNotice);
        assert_eq!(request.language, Some(Language::En));
        assert_eq!(request.tags, vec!["A+".to_string()]);
        assert_eq!(request.fields.get("subject").map(String::as_str), Some("Math"));
    }

    #[test]
    fn reads_json_requests() {
        let file = temp_with(".JSON", r#"{"template": "meeting", "photos": ["local1"]}"#);

        let request: ComposeRequest = read_compose_request(file.path()).unwrap();

        assert_eq!(request.template, TemplateType::Meeting);
        assert_eq!(request.photos, vec!["local1".to_string()]);
    }

    #[test]
    fn rejects_other_extensions() {
        let file = temp_with(".yaml", "template: homework");

        let err: anyhow::Error = read_compose_request(file.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ComposeError>(),
            Some(ComposeError::UnsupportedRequestFormat(_))
        ));
    }

    #[test]
    fn unknown_template_names_fail_to_load() {
        let file = temp_with(".json", r#"{"template": "party"}"#);
        assert!(read_compose_request(file.path()).is_err());
    }
}
