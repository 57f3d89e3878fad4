use std::fmt;

/// Substring classification of a single package line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineClass {
    pub exports: bool,
    pub exports_to: bool,
    pub opens: bool,
    pub opens_to: bool,
}

/// Final counts of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageReport {
    pub package_count: usize,
    pub exports_count: usize,
    pub exports_to_count: usize,
    pub opens_count: usize,
    pub opens_to_count: usize,
}

impl PackageReport {
    /// Five `"<Label>: <n>"` lines, newline terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PackageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total packages: {}", self.package_count)?;
        writeln!(f, "'exports' packages: {}", self.exports_count)?;
        writeln!(f, "'exports to' packages: {}", self.exports_to_count)?;
        writeln!(f, "'opens' packages: {}", self.opens_count)?;
        writeln!(f, "'opens to' packages: {}", self.opens_to_count)
    }
}
