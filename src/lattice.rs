//! `LatticeHash` — `h = A*x + Sponge(A*x) (mod p)` (spec §4.4), used by
//! [`crate::subkey_generator::SubkeyGenerator`] to compress keying material
//! before it is folded into the subkey matrix.

use crate::constants::LARGE_PRIME_P;
use crate::field::MontgomeryField;
use crate::sponge::SpongeHash;
use crate::util::add_mod;
use zeroize::Zeroize;

/// Computes the lattice-plus-sponge hash of `x` under the `r x r`
/// row-major matrix `a` (`a.len() == r*r`, `x.len() == r`), writing the
/// `r`-word result into `out`.
///
/// All Montgomery-form intermediates and the sponge's working buffer are
/// wiped before returning (spec §4.4 invariant).
pub fn lattice_hash(a: &[u64], x: &[u64], out: &mut [u64]) {
    let r = x.len();
    assert_eq!(a.len(), r * r, "LatticeHash: matrix must be r x r for x.len() == r");
    assert_eq!(out.len(), r, "LatticeHash: output must have length r");

    let field = MontgomeryField::new(LARGE_PRIME_P);

    let mut a_mont: Vec<u64> = a.iter().map(|&v| field.to_mont(v % field.modulus())).collect();
    let mut x_mont: Vec<u64> = x.iter().map(|&v| field.to_mont(v % field.modulus())).collect();

    let mut y_mont = vec![0u64; r];
    for row in 0..r {
        let mut acc = 0u64;
        for col in 0..r {
            let term = field.mul(a_mont[row * r + col], x_mont[col]);
            acc = field.add(acc, term);
        }
        y_mont[row] = acc;
    }

    let mut y_std: Vec<u64> = y_mont.iter().map(|&v| field.from_mont(v)).collect();

    let hash_bits = (32 * r).max(128);
    let mut sponge = SpongeHash::new(hash_bits);
    let mut h = vec![0u64; r];
    sponge.sponge_hash(&y_std, &mut h);

    for i in 0..r {
        out[i] = add_mod(y_std[i], h[i], field.modulus());
    }

    a_mont.zeroize();
    x_mont.zeroize();
    y_mont.zeroize();
    y_std.zeroize();
    h.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = vec![1u64, 2, 3, 4];
        let x = vec![5u64, 6];
        let mut out_a = [0u64; 2];
        let mut out_b = [0u64; 2];
        lattice_hash(&a, &x, &mut out_a);
        lattice_hash(&a, &x, &mut out_b);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn sensitive_to_matrix_changes() {
        let a1 = vec![1u64, 2, 3, 4];
        let a2 = vec![1u64, 2, 3, 5];
        let x = vec![5u64, 6];
        let mut out1 = [0u64; 2];
        let mut out2 = [0u64; 2];
        lattice_hash(&a1, &x, &mut out1);
        lattice_hash(&a2, &x, &mut out2);
        assert_ne!(out1, out2);
    }
}
