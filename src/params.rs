//! The immutable NTRUEncrypt parameter catalog (module A).
//!
//! Every record below is transcribed from the reference parameter table;
//! see `DESIGN.md` for the source file. Lookups are linear scans over a
//! fixed 44-entry array, matching the original's own choice of an array
//! over a hash table for a table this small.

/// Stable identifier for a catalog entry.
///
/// The `Chl*` variants are "challenge" parameter sets: product-form,
/// `m_len_max = 0`, unusable for encryption by design (they exist so third
/// parties can attempt to break small lattice instances). The `NtruEes*`
/// variants are production parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamSetId {

    Chl63R0,
    Chl107R0,
    Chl113R0,
    Chl131R0,
    Chl139R0,
    Chl149R0,
    Chl163R0,
    Chl173R0,
    Chl181R0,
    Chl191R0,
    Chl199R0,
    Chl211R0,
    Chl227R0,
    Chl239R0,
    Chl251R0,
    Chl263R0,
    Chl271R0,
    Chl281R0,
    Chl293R0,
    Chl307R0,
    Chl317R0,
    Chl331R0,
    Chl347R0,
    Chl359R0,
    Chl367R0,
    Chl379R0,
    Chl389R0,
    Chl401R0,
    NtruEes401Ep1,
    NtruEes449Ep1,
    NtruEes677Ep1,
    NtruEes1087Ep2,
    NtruEes541Ep1,
    NtruEes613Ep1,
    NtruEes887Ep1,
    NtruEes1171Ep1,
    NtruEes659Ep1,
    NtruEes761Ep1,
    NtruEes1087Ep1,
    NtruEes1499Ep1,
    NtruEes401Ep2,
    NtruEes439Ep1,
    NtruEes593Ep1,
    NtruEes743Ep1,
}

/// One parameter record: ring shape, sampling weights, and IGF/MGF tuning.
///
/// Field names follow the original struct; `key-encoding metadata`
/// (`m_len_max`, `m_len_len`, `min_msg_rep_wt`) is carried here but is not
/// consumed by any operation in this crate beyond the minimum-weight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSet {
    pub id: ParamSetId,
    pub name: &'static str,
    /// 3-byte object identifier.
    pub oid: [u8; 3],
    pub der_id: u8,
    /// Ring degree. Odd prime in every entry.
    pub n: u32,
    pub n_bits: u32,
    /// Security strength in octets; drives hash selection (see `crate::hash`).
    pub sec_strength_len: u32,
    /// Modulus, a power of two.
    pub q: u32,
    pub q_bits: u32,
    pub is_product_form: bool,
    /// Packed 24-bit field: if product-form, low three bytes are d1,d2,d3;
    /// otherwise the full value is the flat |P|=|M| weight.
    pub df_r: u32,
    /// Target half-weight of g: dg positives minus one, dg negatives.
    pub dg: u32,
    pub m_len_max: u32,
    pub min_msg_rep_wt: u32,
    pub no_bias_limit: u32,
    pub c_bits: u32,
    pub m_len_len: u32,
    pub min_igf_hash_calls: u32,
    pub min_mgf_hash_calls: u32,
}

impl ParamSet {
    /// `(d1, d2, d3)` if product-form, otherwise `None`.
    pub fn product_form_weights(&self) -> Option<(u32, u32, u32)> {
        if !self.is_product_form {
            return None;
        }
        let d1 = self.df_r & 0xff;
        let d2 = (self.df_r >> 8) & 0xff;
        let d3 = (self.df_r >> 16) & 0xff;
        Some((d1, d2, d3))
    }

    /// Flat `|P| = |M|` weight of F, valid only when not product-form.
    pub fn flat_weight(&self) -> Option<u32> {
        if self.is_product_form {
            None
        } else {
            Some(self.df_r)
        }
    }

    /// Length in bytes of the DRBG seed consumed at keygen step 2.
    pub fn seed_len(&self) -> usize {
        self.sec_strength_len as usize + 8
    }
}

pub static CATALOG: &[ParamSet] = &[
    ParamSet {
        id: ParamSetId::Chl63R0,
        name: "chl-63r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 63,
        n_bits: 6,
        sec_strength_len: 32,
        q: 512,
        q_bits: 9,
        is_product_form: true,
        df_r: 0x030303,
        dg: 21,
        m_len_max: 0,
        min_msg_rep_wt: 10,
        no_bias_limit: 252,
        c_bits: 8,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl107R0,
        name: "chl-107r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 107,
        n_bits: 7,
        sec_strength_len: 32,
        q: 512,
        q_bits: 9,
        is_product_form: true,
        df_r: 0x040404,
        dg: 36,
        m_len_max: 0,
        min_msg_rep_wt: 20,
        no_bias_limit: 2033,
        c_bits: 11,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl113R0,
        name: "chl-113r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 113,
        n_bits: 7,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x030405,
        dg: 38,
        m_len_max: 0,
        min_msg_rep_wt: 22,
        no_bias_limit: 1017,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl131R0,
        name: "chl-131r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 131,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040405,
        dg: 44,
        m_len_max: 0,
        min_msg_rep_wt: 27,
        no_bias_limit: 4061,
        c_bits: 12,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl139R0,
        name: "chl-139r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 139,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x030505,
        dg: 46,
        m_len_max: 0,
        min_msg_rep_wt: 29,
        no_bias_limit: 973,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl149R0,
        name: "chl-149r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 149,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x030505,
        dg: 50,
        m_len_max: 0,
        min_msg_rep_wt: 31,
        no_bias_limit: 447,
        c_bits: 9,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl163R0,
        name: "chl-163r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 163,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040505,
        dg: 54,
        m_len_max: 0,
        min_msg_rep_wt: 35,
        no_bias_limit: 4075,
        c_bits: 12,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl173R0,
        name: "chl-173r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 173,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040506,
        dg: 58,
        m_len_max: 0,
        min_msg_rep_wt: 38,
        no_bias_limit: 8131,
        c_bits: 13,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl181R0,
        name: "chl-181r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 181,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040506,
        dg: 60,
        m_len_max: 0,
        min_msg_rep_wt: 40,
        no_bias_limit: 8145,
        c_bits: 13,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl191R0,
        name: "chl-191r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 191,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040506,
        dg: 64,
        m_len_max: 0,
        min_msg_rep_wt: 43,
        no_bias_limit: 191,
        c_bits: 8,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl199R0,
        name: "chl-199r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 199,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x060506,
        dg: 66,
        m_len_max: 0,
        min_msg_rep_wt: 45,
        no_bias_limit: 995,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl211R0,
        name: "chl-211r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 211,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040606,
        dg: 70,
        m_len_max: 0,
        min_msg_rep_wt: 48,
        no_bias_limit: 211,
        c_bits: 8,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl227R0,
        name: "chl-227r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 227,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040606,
        dg: 76,
        m_len_max: 0,
        min_msg_rep_wt: 53,
        no_bias_limit: 2043,
        c_bits: 11,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl239R0,
        name: "chl-239r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 239,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040607,
        dg: 80,
        m_len_max: 0,
        min_msg_rep_wt: 56,
        no_bias_limit: 239,
        c_bits: 8,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl251R0,
        name: "chl-251r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 251,
        n_bits: 8,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040607,
        dg: 84,
        m_len_max: 0,
        min_msg_rep_wt: 59,
        no_bias_limit: 251,
        c_bits: 8,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl263R0,
        name: "chl-263r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 263,
        n_bits: 9,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x040607,
        dg: 88,
        m_len_max: 0,
        min_msg_rep_wt: 63,
        no_bias_limit: 8153,
        c_bits: 13,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl271R0,
        name: "chl-271r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 271,
        n_bits: 9,
        sec_strength_len: 32,
        q: 1024,
        q_bits: 10,
        is_product_form: true,
        df_r: 0x060607,
        dg: 90,
        m_len_max: 0,
        min_msg_rep_wt: 65,
        no_bias_limit: 4065,
        c_bits: 12,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl281R0,
        name: "chl-281r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 281,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x040707,
        dg: 94,
        m_len_max: 0,
        min_msg_rep_wt: 68,
        no_bias_limit: 8149,
        c_bits: 13,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl293R0,
        name: "chl-293r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 293,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x040707,
        dg: 98,
        m_len_max: 0,
        min_msg_rep_wt: 71,
        no_bias_limit: 879,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl307R0,
        name: "chl-307r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 307,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x040707,
        dg: 102,
        m_len_max: 0,
        min_msg_rep_wt: 75,
        no_bias_limit: 921,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl317R0,
        name: "chl-317r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 317,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050708,
        dg: 106,
        m_len_max: 0,
        min_msg_rep_wt: 78,
        no_bias_limit: 951,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl331R0,
        name: "chl-331r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 331,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050708,
        dg: 110,
        m_len_max: 0,
        min_msg_rep_wt: 82,
        no_bias_limit: 993,
        c_bits: 10,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl347R0,
        name: "chl-347r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 347,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050708,
        dg: 116,
        m_len_max: 0,
        min_msg_rep_wt: 87,
        no_bias_limit: 347,
        c_bits: 9,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl359R0,
        name: "chl-359r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 359,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x080708,
        dg: 120,
        m_len_max: 0,
        min_msg_rep_wt: 90,
        no_bias_limit: 3949,
        c_bits: 12,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl367R0,
        name: "chl-367r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 367,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050808,
        dg: 122,
        m_len_max: 0,
        min_msg_rep_wt: 92,
        no_bias_limit: 4037,
        c_bits: 12,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl379R0,
        name: "chl-379r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 379,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050808,
        dg: 126,
        m_len_max: 0,
        min_msg_rep_wt: 96,
        no_bias_limit: 379,
        c_bits: 9,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl389R0,
        name: "chl-389r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 389,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050808,
        dg: 130,
        m_len_max: 0,
        min_msg_rep_wt: 99,
        no_bias_limit: 8169,
        c_bits: 13,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::Chl401R0,
        name: "chl-401r0",
        oid: [0xff, 0xff, 0xff],
        der_id: 0xff,
        n: 401,
        n_bits: 9,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x060808,
        dg: 134,
        m_len_max: 0,
        min_msg_rep_wt: 103,
        no_bias_limit: 2005,
        c_bits: 11,
        m_len_len: 0,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::NtruEes401Ep1,
        name: "ees401ep1",
        oid: [0x00, 0x02, 0x04],
        der_id: 0x22,
        n: 401,
        n_bits: 9,
        sec_strength_len: 14,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000071,
        dg: 133,
        m_len_max: 60,
        min_msg_rep_wt: 113,
        no_bias_limit: 2005,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 32,
        min_mgf_hash_calls: 9,
    },
    ParamSet {
        id: ParamSetId::NtruEes449Ep1,
        name: "ees449ep1",
        oid: [0x00, 0x03, 0x03],
        der_id: 0x23,
        n: 449,
        n_bits: 9,
        sec_strength_len: 16,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000086,
        dg: 149,
        m_len_max: 67,
        min_msg_rep_wt: 134,
        no_bias_limit: 449,
        c_bits: 9,
        m_len_len: 1,
        min_igf_hash_calls: 31,
        min_mgf_hash_calls: 9,
    },
    ParamSet {
        id: ParamSetId::NtruEes677Ep1,
        name: "ees677ep1",
        oid: [0x00, 0x05, 0x03],
        der_id: 0x24,
        n: 677,
        n_bits: 10,
        sec_strength_len: 24,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x00009d,
        dg: 225,
        m_len_max: 101,
        min_msg_rep_wt: 157,
        no_bias_limit: 2031,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 27,
        min_mgf_hash_calls: 9,
    },
    ParamSet {
        id: ParamSetId::NtruEes1087Ep2,
        name: "ees1087ep2",
        oid: [0x00, 0x06, 0x03],
        der_id: 0x25,
        n: 1087,
        n_bits: 11,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000078,
        dg: 362,
        m_len_max: 170,
        min_msg_rep_wt: 120,
        no_bias_limit: 7609,
        c_bits: 13,
        m_len_len: 1,
        min_igf_hash_calls: 25,
        min_mgf_hash_calls: 14,
    },
    ParamSet {
        id: ParamSetId::NtruEes541Ep1,
        name: "ees541ep1",
        oid: [0x00, 0x02, 0x05],
        der_id: 0x26,
        n: 541,
        n_bits: 10,
        sec_strength_len: 14,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000031,
        dg: 180,
        m_len_max: 86,
        min_msg_rep_wt: 49,
        no_bias_limit: 3787,
        c_bits: 12,
        m_len_len: 1,
        min_igf_hash_calls: 15,
        min_mgf_hash_calls: 11,
    },
    ParamSet {
        id: ParamSetId::NtruEes613Ep1,
        name: "ees613ep1",
        oid: [0x00, 0x03, 0x04],
        der_id: 0x27,
        n: 613,
        n_bits: 10,
        sec_strength_len: 16,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000037,
        dg: 204,
        m_len_max: 97,
        min_msg_rep_wt: 55,
        no_bias_limit: 1839,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 16,
        min_mgf_hash_calls: 13,
    },
    ParamSet {
        id: ParamSetId::NtruEes887Ep1,
        name: "ees887ep1",
        oid: [0x00, 0x05, 0x04],
        der_id: 0x28,
        n: 887,
        n_bits: 10,
        sec_strength_len: 24,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000051,
        dg: 295,
        m_len_max: 141,
        min_msg_rep_wt: 81,
        no_bias_limit: 887,
        c_bits: 10,
        m_len_len: 1,
        min_igf_hash_calls: 13,
        min_mgf_hash_calls: 12,
    },
    ParamSet {
        id: ParamSetId::NtruEes1171Ep1,
        name: "ees1171ep1",
        oid: [0x00, 0x06, 0x04],
        der_id: 0x29,
        n: 1171,
        n_bits: 11,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x00006a,
        dg: 390,
        m_len_max: 186,
        min_msg_rep_wt: 106,
        no_bias_limit: 3513,
        c_bits: 12,
        m_len_len: 1,
        min_igf_hash_calls: 20,
        min_mgf_hash_calls: 15,
    },
    ParamSet {
        id: ParamSetId::NtruEes659Ep1,
        name: "ees659ep1",
        oid: [0x00, 0x02, 0x06],
        der_id: 0x2a,
        n: 659,
        n_bits: 10,
        sec_strength_len: 14,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x000026,
        dg: 219,
        m_len_max: 108,
        min_msg_rep_wt: 38,
        no_bias_limit: 1977,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 11,
        min_mgf_hash_calls: 14,
    },
    ParamSet {
        id: ParamSetId::NtruEes761Ep1,
        name: "ees761ep1",
        oid: [0x00, 0x03, 0x05],
        der_id: 0x2b,
        n: 761,
        n_bits: 10,
        sec_strength_len: 16,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x00002a,
        dg: 253,
        m_len_max: 125,
        min_msg_rep_wt: 42,
        no_bias_limit: 3805,
        c_bits: 12,
        m_len_len: 1,
        min_igf_hash_calls: 13,
        min_mgf_hash_calls: 16,
    },
    ParamSet {
        id: ParamSetId::NtruEes1087Ep1,
        name: "ees1087ep1",
        oid: [0x00, 0x05, 0x05],
        der_id: 0x2c,
        n: 1087,
        n_bits: 11,
        sec_strength_len: 24,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x00003f,
        dg: 362,
        m_len_max: 178,
        min_msg_rep_wt: 63,
        no_bias_limit: 7609,
        c_bits: 13,
        m_len_len: 1,
        min_igf_hash_calls: 13,
        min_mgf_hash_calls: 14,
    },
    ParamSet {
        id: ParamSetId::NtruEes1499Ep1,
        name: "ees1499ep1",
        oid: [0x00, 0x06, 0x05],
        der_id: 0x2d,
        n: 1499,
        n_bits: 11,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: false,
        df_r: 0x00004f,
        dg: 499,
        m_len_max: 247,
        min_msg_rep_wt: 79,
        no_bias_limit: 7495,
        c_bits: 13,
        m_len_len: 1,
        min_igf_hash_calls: 17,
        min_mgf_hash_calls: 19,
    },
    ParamSet {
        id: ParamSetId::NtruEes401Ep2,
        name: "ees401ep2",
        oid: [0x00, 0x02, 0x10],
        der_id: 0x2e,
        n: 401,
        n_bits: 9,
        sec_strength_len: 14,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x060808,
        dg: 133,
        m_len_max: 60,
        min_msg_rep_wt: 101,
        no_bias_limit: 2005,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 10,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::NtruEes439Ep1,
        name: "ees439ep1",
        oid: [0x00, 0x03, 0x10],
        der_id: 0x2f,
        n: 439,
        n_bits: 9,
        sec_strength_len: 16,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x050809,
        dg: 146,
        m_len_max: 65,
        min_msg_rep_wt: 112,
        no_bias_limit: 439,
        c_bits: 9,
        m_len_len: 1,
        min_igf_hash_calls: 15,
        min_mgf_hash_calls: 6,
    },
    ParamSet {
        id: ParamSetId::NtruEes593Ep1,
        name: "ees593ep1",
        oid: [0x00, 0x05, 0x10],
        der_id: 0x30,
        n: 593,
        n_bits: 10,
        sec_strength_len: 24,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x080a0a,
        dg: 197,
        m_len_max: 86,
        min_msg_rep_wt: 158,
        no_bias_limit: 1779,
        c_bits: 11,
        m_len_len: 1,
        min_igf_hash_calls: 12,
        min_mgf_hash_calls: 5,
    },
    ParamSet {
        id: ParamSetId::NtruEes743Ep1,
        name: "ees743ep1",
        oid: [0x00, 0x06, 0x10],
        der_id: 0x31,
        n: 743,
        n_bits: 10,
        sec_strength_len: 32,
        q: 2048,
        q_bits: 11,
        is_product_form: true,
        df_r: 0x0f0b0b,
        dg: 247,
        m_len_max: 106,
        min_msg_rep_wt: 204,
        no_bias_limit: 8173,
        c_bits: 13,
        m_len_len: 1,
        min_igf_hash_calls: 12,
        min_mgf_hash_calls: 7,
    },


];

/// Look up a parameter record by its stable id.
pub fn by_id(id: ParamSetId) -> Option<&'static ParamSet> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Look up a parameter record by its 3-byte OID.
pub fn by_oid(oid: &[u8; 3]) -> Option<&'static ParamSet> {
    CATALOG.iter().find(|p| &p.oid == oid)
}

/// Look up a parameter record by its 1-byte DER id.
pub fn by_der_id(der_id: u8) -> Option<&'static ParamSet> {
    CATALOG.iter().find(|p| p.der_id == der_id)
}

/// Look up a parameter record by its human-readable name.
pub fn by_name(name: &str) -> Option<&'static ParamSet> {
    CATALOG.iter().find(|p| p.name == name)
}
