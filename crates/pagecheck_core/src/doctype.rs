/// A declared document type node, e.g. `<!DOCTYPE html>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DoctypeInfo {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

impl DoctypeInfo {
    pub fn new(
        name: impl Into<String>,
        public_id: impl Into<String>,
        system_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            public_id: public_id.into(),
            system_id: system_id.into(),
        }
    }

    /// The plain `<!DOCTYPE html>` declaration.
    pub fn html5() -> Self {
        Self::new("html", "", "")
    }
}

/// True iff a doctype is present, is named `html` (any case) and carries no
/// public identifier.
///
/// Legacy HTML 4 and XHTML declarations are also named `html` but always
/// carry a public identifier, so they do not count as `<!DOCTYPE html>`.
pub fn has_html5_doctype(doctype: Option<&DoctypeInfo>) -> bool {
    match doctype {
        Some(doctype) => {
            doctype.name.to_lowercase() == "html" && doctype.public_id.trim().is_empty()
        }
        None => false,
    }
}
