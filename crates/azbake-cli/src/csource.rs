//! C header and source emission.
//!
//! Produces a pair of files a firmware build can compile directly:
//!
//! - `{prefix}_table.h` declares `{PREFIX}_COUNT`, `{PREFIX}_LEN` and the two
//!   pointer tables `{prefix}_L` / `{prefix}_R`.
//! - `{prefix}_all.c` defines one `static const int8_t` array per bucket and
//!   ear (32 values per line) followed by the pointer tables (8 per line).

use std::path::{Path, PathBuf};

use azbake_backend_audio::{PrebakeTable, SinkError, TableSink};

const VALUES_PER_LINE: usize = 32;
const POINTERS_PER_LINE: usize = 8;

/// Writes a table as a C header and source file.
#[derive(Debug, Clone)]
pub struct CSourceSink {
    dir: PathBuf,
    prefix: String,
    stamp: Option<String>,
}

impl CSourceSink {
    /// Creates a sink writing into `dir` with symbol prefix `prefix`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            stamp: None,
        }
    }

    /// Adds a provenance line (e.g. the config hash) to both files.
    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = Some(stamp.into());
        self
    }

    /// Path of the header file.
    pub fn header_path(&self) -> PathBuf {
        self.dir.join(format!("{}_table.h", self.prefix))
    }

    /// Path of the source file.
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(format!("{}_all.c", self.prefix))
    }

    /// Renders the header text.
    pub fn render_header(&self, table: &PrebakeTable) -> String {
        let upper = self.prefix.to_ascii_uppercase();
        let mut lines = self.banner();
        lines.push(format!("#ifndef {}_TABLE_H", upper));
        lines.push(format!("#define {}_TABLE_H", upper));
        lines.push("#include <stdint.h>".to_string());
        lines.push(format!("#define {}_COUNT {}", upper, table.len()));
        lines.push(format!("#define {}_LEN {}", upper, table.loop_len()));
        for ear in ["L", "R"] {
            lines.push(format!(
                "extern const int8_t* const {}_{}[{}_COUNT];",
                self.prefix, ear, upper
            ));
        }
        lines.push("#endif".to_string());
        join_lines(&lines)
    }

    /// Renders the source text.
    pub fn render_source(&self, table: &PrebakeTable) -> String {
        let mut lines = self.banner();
        lines.push("#include <stdint.h>".to_string());

        for (index, bucket) in table.iter().enumerate() {
            for (ear, samples) in [("L", &bucket.left), ("R", &bucket.right)] {
                let values: Vec<String> = samples.iter().map(|v| v.to_string()).collect();
                lines.push(String::new());
                lines.push(format!(
                    "static const int8_t {}_{}_{}[] = {{",
                    self.prefix, ear, index
                ));
                push_rows(&mut lines, &values, VALUES_PER_LINE);
                lines.push("};".to_string());
            }
        }

        for ear in ["L", "R"] {
            let names: Vec<String> = (0..table.len())
                .map(|index| format!("{}_{}_{}", self.prefix, ear, index))
                .collect();
            lines.push(String::new());
            lines.push(format!(
                "const int8_t* const {}_{}[{}] = {{",
                self.prefix,
                ear,
                table.len()
            ));
            push_rows(&mut lines, &names, POINTERS_PER_LINE);
            lines.push("};".to_string());
        }
        join_lines(&lines)
    }

    fn banner(&self) -> Vec<String> {
        let mut lines = vec!["/* Generated by azbake. Do not edit. */".to_string()];
        if let Some(ref stamp) = self.stamp {
            lines.push(format!("/* {} */", stamp));
        }
        lines
    }
}

impl TableSink for CSourceSink {
    /// Writes both files or neither.
    ///
    /// Each file is first written under a temporary name in the output
    /// directory, then renamed into place. If any step fails, the temporary
    /// files and any file already renamed in this call are removed.
    fn write_table(&mut self, table: &PrebakeTable) -> Result<(), SinkError> {
        if !is_c_identifier(&self.prefix) {
            return Err(SinkError::Format(format!(
                "prefix '{}' is not a valid C identifier",
                self.prefix
            )));
        }

        let header = self.render_header(table);
        let source = self.render_source(table);

        std::fs::create_dir_all(&self.dir)?;
        let staged = [
            (staging_path(&self.source_path()), self.source_path(), source),
            (staging_path(&self.header_path()), self.header_path(), header),
        ];

        let result = commit(&staged);
        if result.is_err() {
            for (temp, _, _) in &staged {
                let _ = std::fs::remove_file(temp);
            }
        }
        result
    }
}

/// Writes every staged file, then renames them into place in order.
fn commit(staged: &[(PathBuf, PathBuf, String)]) -> Result<(), SinkError> {
    for (temp, _, text) in staged {
        std::fs::write(temp, text)?;
    }
    for (done, (temp, path, _)) in staged.iter().enumerate() {
        if let Err(err) = std::fs::rename(temp, path) {
            for (_, renamed, _) in &staged[..done] {
                let _ = std::fs::remove_file(renamed);
            }
            return Err(err.into());
        }
        log::debug!("wrote {}", path.display());
    }
    Ok(())
}

/// Temporary sibling of `path`: `.{file name}.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Appends `items` comma-separated, `per_line` to a line, indented by four.
fn push_rows(lines: &mut Vec<String>, items: &[String], per_line: usize) {
    let rows: Vec<&[String]> = items.chunks(per_line).collect();
    for (i, row) in rows.iter().enumerate() {
        let sep = if i + 1 == rows.len() { "" } else { "," };
        lines.push(format!("    {}{}", row.join(","), sep));
    }
}

/// Joins lines with a trailing newline after each.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Returns true if `name` is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
