// Prompt constants for the narration endpoint.
// Placeholders use the same tokens as catalog sentences and are filled by
// `lookup::fill_placeholders`.

/// System prompt for narration.
pub const NARRATION_SYSTEM: &str = "Kamu adalah konsultan mobil listrik yang ramah. \
    Jawab dalam bahasa Indonesia, singkat dan menyenangkan. \
    Jangan merekomendasikan mobil selain yang disebutkan dalam rekomendasi dasar.";

/// Narration prompt template. Fills `{umur}`, `{gaya}`, `{pekerjaan}`, `{manufacturer}`.
pub const NARRATION_PROMPT_TEMPLATE: &str = "Berdasarkan umur {umur}, gaya {gaya}, pekerjaan {pekerjaan}, dan produsen mobil {manufacturer}, \
    berikan rekomendasi mobil listrik yang cocok untuk pengguna berdasarkan gaya hidup mereka. \
    Tambahkan sentuhan tema yang menyenangkan!";

/// Heading placed before the canned recommendation in the prompt.
pub const GROUNDING_HEADING: &str = "Rekomendasi dasar:";
