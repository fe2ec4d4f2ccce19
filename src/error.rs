use std::error::Error;

#[derive(thiserror::Error)]
pub enum ProbeError {
    #[error("{0}")]
    InvalidTarget(String),

    #[error("Failed to build the http client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

impl std::fmt::Debug for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ProbeError {
    /// The error and every cause below it on one line, e.g.
    /// `error sending request for url (..): error trying to connect: tcp connect error: Connection refused (os error 111)`.
    pub fn description_chain(&self) -> String {
        // `Request` displays its inner error verbatim, so start from the inner error
        let root: &(dyn Error + 'static) = match self {
            ProbeError::Request(e) => e,
            _ => self,
        };

        let mut message = root.to_string();
        let mut current = root.source();
        while let Some(cause) = current {
            let cause_message = cause.to_string();
            if !message.contains(&cause_message) {
                message.push_str(": ");
                message.push_str(&cause_message);
            }
            current = cause.source();
        }
        message
    }
}

/// Writes an error followed by its chain of causes, one per paragraph.
pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
