use std::path::{Path, PathBuf};

/// A file handed over by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Selection made in a file dialog.
    Dialog(Vec<PathBuf>),
    /// Payload of a drop. `items` are the transfer items (an item doesn't always resolve to a
    /// file); `files` is the plain file list.
    Drop {
        items: Vec<Option<PathBuf>>,
        files: Vec<PathBuf>,
    },
}

/// What a submission resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picked<'a> {
    /// Nothing has been submitted.
    Nothing,
    /// A transfer item has been dropped, but it isn't a file.
    NotAFile,
    File(&'a Path),
}

impl Submission {
    /// Picks the file to hash: the first one selected or dropped. When a drop carries transfer
    /// items, the first item wins over the file list.
    pub fn pick(&self) -> Picked<'_> {
        match self {
            Self::Dialog(files) => files
                .first()
                .map(|path| Picked::File(path))
                .unwrap_or(Picked::Nothing),
            Self::Drop { items, files } => {
                if let Some(item) = items.first() {
                    item.as_deref().map(Picked::File).unwrap_or(Picked::NotAFile)
                } else {
                    files
                        .first()
                        .map(|path| Picked::File(path))
                        .unwrap_or(Picked::Nothing)
                }
            }
        }
    }
}

/// Drop target state: highlighted while something is dragged over it.
#[derive(Debug, Default)]
pub struct DropZone {
    hovering: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn drag_enter(&mut self) {
        self.hovering = true;
    }

    pub fn drag_over(&mut self) {
        self.hovering = true;
    }

    pub fn drag_leave(&mut self) {
        self.hovering = false;
    }

    pub fn drag_end(&mut self) {
        self.hovering = false;
    }

    /// Clears the highlight and turns the payload into a submission.
    pub fn drop(&mut self, items: Vec<Option<PathBuf>>, files: Vec<PathBuf>) -> Submission {
        self.hovering = false;
        Submission::Drop { items, files }
    }
}
