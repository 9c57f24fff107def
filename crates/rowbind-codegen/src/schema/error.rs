/// Accumulates attribute and field errors so one derive reports all of them
/// at once.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    combined: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.combined {
            Some(combined) => combined.combine(err),
            None => self.combined = Some(err),
        }
    }

    /// The combined error, if anything was pushed.
    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.combined
    }
}
