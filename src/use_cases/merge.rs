use crate::domain::error_tree::{FieldError, FieldErrors};

/// Merges client-side (`frontend`) and server-side (`backend`) error trees.
///
/// Returns a new tree; neither input is modified. Backend leaves replace the
/// frontend message but keep the frontend's `type` and metadata. Backend
/// subtrees are merged recursively. Where the two trees disagree on the
/// shape of a field, the backend shape wins. Lists are never merged per
/// element. Keys only the frontend knows about are kept as they are.
pub fn merge_errors(frontend: &FieldErrors, backend: Option<&FieldErrors>) -> FieldErrors {
    match backend {
        Some(backend) if !backend.is_empty() => merge_into(frontend.clone(), backend),
        _ => frontend.clone(),
    }
}

// Frontend fields stay where they are; backend-only fields are appended.
fn merge_into(mut merged: FieldErrors, backend: &FieldErrors) -> FieldErrors {
    for (field, backend_error) in backend.iter() {
        match merged.get_mut(field) {
            Some(slot) => {
                let existing = std::mem::replace(slot, FieldError::List(Vec::new()));
                *slot = merge_node(Some(existing), backend_error);
            }
            None => {
                merged.insert(field, merge_node(None, backend_error));
            }
        }
    }
    merged
}

fn merge_node(existing: Option<FieldError>, backend_error: &FieldError) -> FieldError {
    match (existing, backend_error) {
        (Some(FieldError::Subtree(subtree)), FieldError::Subtree(backend_subtree)) => {
            FieldError::Subtree(merge_into(subtree, backend_subtree))
        }
        // An empty backend subtree carries nothing to apply.
        (Some(existing), FieldError::Subtree(backend_subtree)) if backend_subtree.is_empty() => {
            existing
        }
        (_, FieldError::Subtree(backend_subtree)) => {
            FieldError::Subtree(merge_into(FieldErrors::new(), backend_subtree))
        }
        (Some(FieldError::Leaf(mut leaf)), FieldError::Leaf(backend_leaf)) => {
            if backend_leaf.message.is_some() {
                leaf.message.clone_from(&backend_leaf.message);
            }
            FieldError::Leaf(leaf)
        }
        (_, backend_error) => backend_error.clone(),
    }
}
