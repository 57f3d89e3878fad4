use crate::domain::model::{LineClass, PackageReport};
use crate::utils::error::{AnalyzeError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const PACKAGE_PREFIX: &str = "Package";
const EXPORTS: &str = "exports";
const EXPORTS_TO: &str = "exports to";
const OPENS: &str = "opens";
const OPENS_TO: &str = "opens to";

/// Whitespace for the prefix test: Unicode whitespace plus the ASCII
/// file/group/record/unit separators.
fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classifies one input line.
///
/// Returns `None` unless the trimmed line starts with `Package`. The
/// substring tests run on the line exactly as given, not on the trimmed form.
pub fn classify_line(line: &str) -> Option<LineClass> {
    if !line.trim_matches(is_line_space).starts_with(PACKAGE_PREFIX) {
        return None;
    }

    let exports_to = line.contains(EXPORTS_TO);
    let opens_to = line.contains(OPENS_TO);

    Some(LineClass {
        exports: !exports_to && line.contains(EXPORTS),
        exports_to,
        opens: !opens_to && line.contains(OPENS),
        opens_to,
    })
}

/// Accumulates counts over a sequence of lines.
#[derive(Debug, Default)]
pub struct PackageCounter {
    report: PackageReport,
}

impl PackageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, line: &str) {
        let Some(class) = classify_line(line) else {
            return;
        };

        let report = &mut self.report;
        report.package_count += 1;
        report.exports_count += usize::from(class.exports);
        report.exports_to_count += usize::from(class.exports_to);
        report.opens_count += usize::from(class.opens);
        report.opens_to_count += usize::from(class.opens_to);
    }

    pub fn finish(self) -> PackageReport {
        self.report
    }
}

/// 逐行掃描任意 reader。`\n`、`\r\n` 與單獨的 `\r` 皆視為行尾；
/// 非 UTF-8 內容以替代字元解碼，不視為錯誤。
pub fn analyze_reader<R: BufRead>(mut reader: R) -> io::Result<PackageReport> {
    let mut counter = PackageCounter::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let body = text.strip_suffix('\n').unwrap_or(&text);
        let body = body.strip_suffix('\r').unwrap_or(body);
        // any `\r` left in the chunk is a bare carriage return line end
        for line in body.split('\r') {
            counter.observe(line);
        }
    }

    Ok(counter.finish())
}

/// 分析檔案中的 Package 行。
pub fn analyze_packages<P: AsRef<Path>>(path: P) -> Result<PackageReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AnalyzeError::file_access(path, e))?;
    analyze_reader(BufReader::new(file)).map_err(|e| AnalyzeError::file_access(path, e))
}
