//! Modular arithmetic substrate: reduction to `[0, q)` and overflow-safe vector/matrix
//! products. All ring elements are carried as `u32` residues; intermediate accumulation uses
//! `i64`, which `Params::new` has already proven cannot overflow for the parameter set in use
//! (`m * (q-1)^2 < 2^63`).

/// Reduces a signed accumulator to the least non-negative residue mod `q`.
#[must_use]
pub(crate) fn reduce(x: i64, q: u32) -> u32 {
    let q = i64::from(q);
    (((x % q) + q) % q) as u32
}

/// Matrix-vector product `A · v mod q`, `A` is `m x n` row-major, `v` has length `n`.
pub(crate) fn mat_vec_mul(a: &[u32], rows: usize, cols: usize, v: &[i32], q: u32) -> Vec<u32> {
    debug_assert_eq!(a.len(), rows * cols);
    debug_assert_eq!(v.len(), cols);
    let mut out = Vec::with_capacity(rows);
    for row in a.chunks_exact(cols) {
        let mut acc: i64 = 0;
        for (a_ij, v_j) in row.iter().zip(v) {
            acc += i64::from(*a_ij) * i64::from(*v_j);
        }
        out.push(reduce(acc, q));
    }
    out
}

/// Transposed matrix-vector product `Aᵀ · v mod q`, `A` is `m x n` row-major, `v` has length
/// `m` and is a 0/1 sparse selector (used by encryption, where `v` is the sparse vector `r`).
pub(crate) fn mat_t_vec_mul_bits(
    a: &[u32], rows: usize, cols: usize, selected_rows: &[usize], q: u32,
) -> Vec<u32> {
    debug_assert_eq!(a.len(), rows * cols);
    let mut acc = vec![0i64; cols];
    for &i in selected_rows {
        let row = &a[i * cols..(i + 1) * cols];
        for (acc_j, a_ij) in acc.iter_mut().zip(row) {
            *acc_j += i64::from(*a_ij);
        }
    }
    acc.into_iter().map(|x| reduce(x, q)).collect()
}

/// Dot product `⟨selected rows of b, 1⟩ mod q`, i.e. `⟨r, b⟩` where `r` is given as the set of
/// indices it is 1 at.
pub(crate) fn sparse_dot(b: &[u32], selected_rows: &[usize], q: u32) -> u32 {
    let mut acc: i64 = 0;
    for &i in selected_rows {
        acc += i64::from(b[i]);
    }
    reduce(acc, q)
}

/// Dot product `⟨u, s⟩ mod q` for a length-n ring vector `u` and signed small-integer secret `s`.
pub(crate) fn dot(u: &[u32], s: &[i32], q: u32) -> u32 {
    debug_assert_eq!(u.len(), s.len());
    let mut acc: i64 = 0;
    for (u_i, s_i) in u.iter().zip(s) {
        acc += i64::from(*u_i) * i64::from(*s_i);
    }
    reduce(acc, q)
}

/// Component-wise addition of two ring vectors mod `q`.
pub(crate) fn add_vecs(a: &[u32], b: &[u32], q: u32) -> Vec<u32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| reduce(i64::from(*x) + i64::from(*y), q)).collect()
}
