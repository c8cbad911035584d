//! Extractor backed by an external program

use super::traits::{ExtractError, Extractor};
use crate::state::{FieldMap, FieldValue, FormKind};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// How long an extraction may run before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Pipes raw text to a program and reads a JSON object of field values back.
///
/// The program receives the form context (`legal-text` or `procedure`) as its
/// last argument and the raw text on stdin. The process is killed when it
/// outlives the timeout.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from a whitespace separated command line
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    async fn run(&self, context: &str, text: &str) -> Result<FieldMap, ExtractError> {
        tracing::debug!("Running extractor {} for {context}", self.program);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(context)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // Feed stdin while draining stdout and stderr, so a chatty program
        // cannot fill a pipe and stall both sides
        let stdin = child.stdin.take();
        let feed = async move {
            match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
                None => Ok(()),
            }
        };
        let (fed, output) = tokio::time::timeout(self.timeout, async {
            tokio::join!(feed, child.wait_with_output())
        })
        .await
        .map_err(|_| {
            tracing::warn!("Extractor {} timed out after {:?}", self.program, self.timeout);
            ExtractError::TimedOut(self.timeout)
        })?;

        let output = output?;
        if !output.status.success() {
            return Err(ExtractError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        // Programs may answer without reading all of their input
        if let Err(err) = fed {
            if err.kind() != ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }

        parse_field_map(&output.stdout)
    }
}

#[async_trait]
impl Extractor for CommandExtractor {
    async fn extract_legal_text(&self, text: &str) -> Result<FieldMap, ExtractError> {
        self.run(FormKind::LegalText.context(), text).await
    }

    async fn extract_procedure(&self, text: &str) -> Result<FieldMap, ExtractError> {
        self.run(FormKind::Procedure.context(), text).await
    }
}

/// Parse extractor output into field values
pub fn parse_field_map(bytes: &[u8]) -> Result<FieldMap, ExtractError> {
    let Value::Object(object) = serde_json::from_slice(bytes)? else {
        return Err(ExtractError::NotAnObject);
    };

    let mut map = FieldMap::new();
    for (name, value) in object {
        match to_field_value(value) {
            Some(value) => {
                map.insert(name, value);
            }
            None => tracing::debug!("Ignoring extracted field {name}: unsupported value"),
        }
    }
    Ok(map)
}

fn to_field_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Bool(b) => Some(FieldValue::Bool(b)),
        Value::Number(n) => Some(FieldValue::Text(n.to_string())),
        Value::Array(items) => Some(FieldValue::List(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
        )),
        Value::Null | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod parsing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_maps_json_types_to_field_values() {
            let json = r#"{
                "title": "Loi n° 90-11",
                "pageNumber": 12,
                "hasAppeal": true,
                "articles": ["Article 1", "Article 2"],
                "ignored": null,
                "nested": {"a": 1}
            }"#;
            let map = parse_field_map(json.as_bytes()).unwrap();
            assert_eq!(map.len(), 4);
            assert_eq!(map.get("title"), Some(&FieldValue::from("Loi n° 90-11")));
            assert_eq!(map.get("pageNumber"), Some(&FieldValue::from("12")));
            assert_eq!(map.get("hasAppeal"), Some(&FieldValue::Bool(true)));
            assert_eq!(
                map.get("articles"),
                Some(&FieldValue::List(vec![
                    "Article 1".to_string(),
                    "Article 2".to_string()
                ]))
            );
        }

        #[test]
        fn test_rejects_non_object() {
            assert!(matches!(
                parse_field_map(b"[1, 2]"),
                Err(ExtractError::NotAnObject)
            ));
        }

        #[test]
        fn test_rejects_invalid_json() {
            assert!(matches!(
                parse_field_map(b"pas du json"),
                Err(ExtractError::InvalidOutput(_))
            ));
        }
    }

    #[test]
    fn test_from_command_line() {
        let extractor = CommandExtractor::from_command_line("python3 extract.py --lang fr").unwrap();
        assert_eq!(extractor.program, "python3");
        assert_eq!(extractor.args, vec!["extract.py", "--lang", "fr"]);
        assert!(CommandExtractor::from_command_line("   ").is_none());
    }

    #[cfg(unix)]
    mod process {
        use super::*;
        use pretty_assertions::assert_eq;

        fn shell(script: &str) -> CommandExtractor {
            CommandExtractor::new("sh", vec!["-c".to_string(), script.to_string()])
        }

        #[tokio::test]
        async fn test_reads_json_from_stdout() {
            // `$0` is the context argument appended after the script
            let extractor = shell(r#"read line; printf '{"context":"%s","first":"%s"}' "$0" "$line""#);
            let map = extractor
                .extract_legal_text("JOURNAL OFFICIEL\nsuite")
                .await
                .unwrap();
            assert_eq!(map.get("context"), Some(&FieldValue::from("legal-text")));
            assert_eq!(map.get("first"), Some(&FieldValue::from("JOURNAL OFFICIEL")));
        }

        #[tokio::test]
        async fn test_procedure_context() {
            let extractor = shell(r#"cat > /dev/null; printf '{"context":"%s"}' "$0""#);
            let map = extractor.extract_procedure("texte").await.unwrap();
            assert_eq!(map.get("context"), Some(&FieldValue::from("procedure")));
        }

        #[tokio::test]
        async fn test_non_zero_exit_is_failure() {
            let extractor = shell("cat > /dev/null; echo 'modèle indisponible' >&2; exit 3");
            let err = extractor.extract_procedure("texte").await.unwrap_err();
            match err {
                ExtractError::Failed { stderr, .. } => assert_eq!(stderr, "modèle indisponible"),
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_large_input_with_chatty_stderr() {
            let extractor = shell("cat >&2; echo '{}'");
            let text = "Article 1 : dispositions générales\n".repeat(20_000);
            let map = extractor.extract_legal_text(&text).await.unwrap();
            assert!(map.is_empty());
        }

        #[tokio::test]
        async fn test_answer_without_reading_input() {
            let extractor = shell(r#"printf '{"title":"Décret"}'"#);
            let text = "x".repeat(1 << 20);
            let map = extractor.extract_legal_text(&text).await.unwrap();
            assert_eq!(map.get("title"), Some(&FieldValue::from("Décret")));
        }

        #[tokio::test]
        async fn test_slow_program_times_out() {
            let extractor = shell("sleep 5").with_timeout(Duration::from_millis(100));
            assert!(matches!(
                extractor.extract_procedure("texte").await,
                Err(ExtractError::TimedOut(_))
            ));
        }

        #[tokio::test]
        async fn test_missing_program_is_io_error() {
            let extractor = CommandExtractor::new("/nonexistent/lexdz-extract", vec![]);
            assert!(matches!(
                extractor.extract_legal_text("texte").await,
                Err(ExtractError::Io(_))
            ));
        }
    }
}
