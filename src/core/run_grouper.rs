use crate::core::char_util::Script;

/// Maximal slice of the input whose code points share one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    /// byte offset of `text` in the grouped input
    pub offset: usize,
    pub script: Script,
}

impl<'a> Run<'a> {
    pub fn is_thai(&self) -> bool {
        self.script == Script::Thai
    }
}

/// Splits `text` into script runs. Concatenating the runs gives back `text`.
pub fn group_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut script: Option<Script> = None;
    for (offset, c) in text.char_indices() {
        let curr = Script::from(c);
        match script {
            Some(open) if open != curr => {
                runs.push(Run {
                    text: &text[start..offset],
                    offset: start,
                    script: open,
                });
                start = offset;
                script = Some(curr);
            }
            Some(_) => {}
            None => script = Some(curr),
        }
    }
    if let Some(open) = script {
        runs.push(Run {
            text: &text[start..],
            offset: start,
            script: open,
        });
    }
    runs
}
