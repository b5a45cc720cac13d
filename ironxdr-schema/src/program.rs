//! RPC program definitions.
//!
//! Program blocks are parsed so that complete `.x` files are accepted, but
//! code generation emits nothing for them.

/// `program ID { version ... } = N;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDef {
    /// Program name.
    pub id: String,
    /// Program number expression.
    pub number: String,
    /// Versions in declaration order.
    pub versions: Vec<VersionDef>,
}

impl ProgramDef {
    /// Creates a new program definition.
    #[must_use]
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            versions: Vec::new(),
        }
    }

    /// Finds a version by name.
    #[must_use]
    pub fn get_version(&self, id: &str) -> Option<&VersionDef> {
        self.versions.iter().find(|v| v.id == id)
    }
}

/// `version ID { procedures } = N;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDef {
    /// Version name.
    pub id: String,
    /// Version number expression.
    pub number: String,
    /// Procedures in declaration order.
    pub procedures: Vec<ProcedureDef>,
}

/// `result ID(arg, ...) = N;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureDef {
    /// Procedure name.
    pub id: String,
    /// Procedure number expression.
    pub number: String,
    /// Result type name.
    pub result: String,
    /// Argument type names.
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_get_version() {
        let mut prog = ProgramDef::new("NFS_PROGRAM", "100003");
        prog.versions.push(VersionDef {
            id: "NFS_V3".into(),
            number: "3".into(),
            procedures: vec![ProcedureDef {
                id: "NFSPROC3_NULL".into(),
                number: "0".into(),
                result: "void".into(),
                args: vec!["void".into()],
            }],
        });

        let version = prog.get_version("NFS_V3").expect("version present");
        assert_eq!(version.procedures.len(), 1);
        assert!(prog.get_version("NFS_V4").is_none());
    }
}
