///
/// One alignment record from a 12-column BLAST tabular file, reduced to the
/// fields region building consumes: the query/subject identifiers and the
/// subject-side coordinate span.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct BlastHit {
    pub query_id: String,
    pub subject_id: String,

    /// Subject start coordinate (`s_start`).
    pub start: u32,

    /// Subject end coordinate (`s_end`). Minus-strand hits can carry
    /// `end < start`; region building does not reorient them.
    pub end: u32,
}
