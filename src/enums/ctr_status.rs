#[doc = "What `ensure_ctr` did to the table"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrStatus {
    /* ctr was already a column, nothing changed */
    AlreadyPresent,
    /* computed from clicks and impressions */
    Computed,
    /* clicks or impressions missing, ad groups present: all zeros */
    ZeroFilled,
    /* nothing to compute from and nothing to chart against */
    Unavailable,
}
