//! Sprint id generation.
//!
//! Sprint ids are short lowercase alphanumeric strings so they are easy to
//! type on the command line (`rota delete k3f9a0x2`).

use rand::Rng;

use crate::timeline::SprintId;

/// Character set for sprint ids: lowercase letters and digits.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated sprint ids.
const ID_LEN: usize = 8;

/// Generate a random sprint id.
///
/// # Examples
/// ```
/// use rota::sprint_id::generate_sprint_id;
///
/// let id = generate_sprint_id();
/// assert_eq!(id.as_str().len(), 8);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_sprint_id() -> SprintId {
    generate_sprint_id_with(&mut rand::thread_rng())
}

/// Generate a sprint id from the given random source.
pub fn generate_sprint_id_with<R: Rng + ?Sized>(rng: &mut R) -> SprintId {
    let id: String = (0..ID_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    SprintId::new(id)
}
