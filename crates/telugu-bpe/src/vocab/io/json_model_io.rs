//! # JSON Model IO

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{TBResult, TeluguBpeError},
    vocab::BpeModel,
};

/// Load a [`BpeModel`] from a JSON model file.
///
/// # Arguments
/// * `path` - the path to the model file.
///
/// # Errors
/// * [`TeluguBpeError::ModelNotFound`] - when `path` does not exist.
/// * [`TeluguBpeError::ModelFormat`] - when the payload is not a model.
/// * [`TeluguBpeError::Io`] - for any other read failure.
pub fn load_model_path<P: AsRef<Path>>(path: P) -> TBResult<BpeModel> {
    let path = path.as_ref();
    log::debug!("loading model: {}", path.display());

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => TeluguBpeError::ModelNotFound {
            path: path.to_path_buf(),
        },
        _ => TeluguBpeError::Io(err),
    })?;

    read_model_json(BufReader::new(file))
}

/// Read a [`BpeModel`] from a JSON reader.
///
/// # Arguments
/// * `reader` - the reader.
pub fn read_model_json<R: Read>(reader: R) -> TBResult<BpeModel> {
    serde_json::from_reader(reader).map_err(TeluguBpeError::from_json_error)
}

/// Save a [`BpeModel`] to a JSON model file.
///
/// Missing parent directories are created. The model is written to a sibling
/// ``*.tmp`` file, synced, and renamed over `path`; on failure the temporary
/// file is removed and any previous file at `path` is left untouched.
///
/// # Arguments
/// * `model` - the model to save.
/// * `path` - the destination path.
pub fn save_model_path<P: AsRef<Path>>(
    model: &BpeModel,
    path: P,
) -> TBResult<()> {
    let path = path.as_ref();
    log::debug!("saving model: {}", path.display());

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_sibling_path(path);
    let result = write_model_file(model, &tmp_path)
        .and_then(|_| fs::rename(&tmp_path, path).map_err(TeluguBpeError::from));

    if result.is_err() {
        // The temp file may not exist; nothing more to report.
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Write a [`BpeModel`] as pretty-printed JSON.
///
/// # Arguments
/// * `model` - the model to write.
/// * `writer` - the writer to target.
pub fn write_model_json<W: Write>(
    model: &BpeModel,
    writer: &mut W,
) -> TBResult<()> {
    serde_json::to_writer_pretty(&mut *writer, model).map_err(TeluguBpeError::from_json_error)?;
    writeln!(writer)?;
    Ok(())
}

fn write_model_file(
    model: &BpeModel,
    path: &Path,
) -> TBResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_model_json(model, &mut writer)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn temp_sibling_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("model"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{
        types::Symbol,
        vocab::{MergeList, MergeRule},
    };

    fn sample_model() -> BpeModel {
        let merges: MergeList = vec![
            MergeRule::new("్", "మ"),
            MergeRule::new("అ", "మ"),
            MergeRule::new("అమ", "్మ"),
        ]
        .into();
        let vocab: BTreeSet<Symbol> = ["అ", "మ", "్", "్మ", "అమ", "అమ్మ"]
            .into_iter()
            .map(Symbol::from)
            .collect();
        BpeModel::new(6, merges, vocab)
    }

    #[test]
    fn test_save_load_model() {
        let model = sample_model();

        tempdir::TempDir::new("model_test")
            .and_then(|dir| {
                let path = dir.path().join("nested").join("deeper").join("model.json");

                save_model_path(&model, &path).expect("Failed to save model");
                assert!(path.exists());
                assert!(!temp_sibling_path(&path).exists());

                let loaded = load_model_path(&path).expect("Failed to load model");
                assert_eq!(loaded, model);

                // Overwrite in place.
                let smaller = BpeModel::new(3, MergeList::new(), BTreeSet::new());
                save_model_path(&smaller, &path).expect("Failed to overwrite model");
                assert_eq!(load_model_path(&path).unwrap(), smaller);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing() {
        tempdir::TempDir::new("model_test")
            .and_then(|dir| {
                let path = dir.path().join("missing.json");
                match load_model_path(&path) {
                    Err(TeluguBpeError::ModelNotFound { path: p }) => assert_eq!(p, path),
                    other => panic!("unexpected: {other:?}"),
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_malformed() {
        tempdir::TempDir::new("model_test")
            .and_then(|dir| {
                let cases = [
                    "",
                    "not json",
                    r#"{"vocab_size": 10}"#,
                    r#"{"vocab_size": 10, "merges": ["a b"], "vocab": []}"#,
                    r#"{"vocab_size": 10, "merges": {"ab": "ab"}, "vocab": []}"#,
                    r#"{"vocab_size": 10, "merges": {"a b": "ba"}, "vocab": []}"#,
                ];
                for (idx, payload) in cases.iter().enumerate() {
                    let path = dir.path().join(format!("bad{idx}.json"));
                    fs::write(&path, payload)?;
                    match load_model_path(&path) {
                        Err(TeluguBpeError::ModelFormat(_)) => (),
                        other => panic!("unexpected for {payload:?}: {other:?}"),
                    }
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_save_failure_keeps_previous() {
        let model = sample_model();

        tempdir::TempDir::new("model_test")
            .and_then(|dir| {
                // The destination is a non-empty directory; the rename must fail.
                let path = dir.path().join("model.json");
                fs::create_dir_all(path.join("occupied"))?;

                match save_model_path(&model, &path) {
                    Err(TeluguBpeError::Io(_)) => (),
                    other => panic!("unexpected: {other:?}"),
                }
                assert!(path.join("occupied").is_dir());
                assert!(!temp_sibling_path(&path).exists());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_read_json() {
        let model = sample_model();
        let mut buf: Vec<u8> = Vec::new();
        write_model_json(&model, &mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        let first = text.find("\"్ మ\"").unwrap();
        let second = text.find("\"అ మ\"").unwrap();
        let third = text.find("\"అమ ్మ\"").unwrap();
        assert!(first < second && second < third);

        assert_eq!(read_model_json(buf.as_slice()).unwrap(), model);
    }

    #[test]
    fn test_temp_sibling_path() {
        assert_eq!(
            temp_sibling_path(Path::new("/a/b/model.json")),
            PathBuf::from("/a/b/model.json.tmp")
        );
    }
}
