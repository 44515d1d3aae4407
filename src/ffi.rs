//! C ABI wrapper around [`crate::stream_cipher::LittleOaldresPuzzleCryptic`]
//! (spec §6), grounded on the two-field `{first, second}` struct layout
//! and function names used by the original `Wrapper_LittleOaldresPuzzle_Cryptic`
//! C header.

use std::slice;

use crate::stream_cipher::{Block128, Key128, LittleOaldresPuzzleCryptic};

/// `{first, second}` 128-bit block, bit-compatible with the C struct.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CBlock128 {
    pub first: u64,
    pub second: u64,
}

/// `{first, second}` 128-bit key, same layout as [`CBlock128`].
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CKey128 {
    pub first: u64,
    pub second: u64,
}

impl From<CBlock128> for Block128 {
    fn from(b: CBlock128) -> Self {
        (b.first, b.second)
    }
}

impl From<Block128> for CBlock128 {
    fn from(b: Block128) -> Self {
        CBlock128 { first: b.0, second: b.1 }
    }
}

impl From<CKey128> for Key128 {
    fn from(k: CKey128) -> Self {
        (k.first, k.second)
    }
}

/// Opaque handle returned by [`littleopc_new`]. Always check for null
/// before use; every other function in this module is a documented no-op
/// on a null handle.
pub type LittleOpcInstance = *mut LittleOaldresPuzzleCryptic;

/// Allocates a `Cipher1` with the default 4 rounds (spec §6).
#[no_mangle]
pub unsafe extern "C" fn littleopc_new(seed: u64) -> LittleOpcInstance {
    Box::into_raw(Box::new(LittleOaldresPuzzleCryptic::new(seed)))
}

/// Destroys a handle allocated by [`littleopc_new`].
#[no_mangle]
pub unsafe extern "C" fn littleopc_delete(handle: LittleOpcInstance) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Reseeds the PRF to the constructor seed.
#[no_mangle]
pub unsafe extern "C" fn littleopc_reset_prng(handle: LittleOpcInstance) {
    if let Some(cipher) = handle.as_mut() {
        cipher.reset_prng();
    }
}

#[no_mangle]
pub unsafe extern "C" fn littleopc_single_round_encryption(
    handle: LittleOpcInstance,
    data: CBlock128,
    key: CKey128,
    number_once: u64,
) -> CBlock128 {
    match handle.as_mut() {
        Some(cipher) => cipher.single_round_encryption(data.into(), key.into(), number_once).into(),
        None => data,
    }
}

#[no_mangle]
pub unsafe extern "C" fn littleopc_single_round_decryption(
    handle: LittleOpcInstance,
    data: CBlock128,
    key: CKey128,
    number_once: u64,
) -> CBlock128 {
    match handle.as_mut() {
        Some(cipher) => cipher.single_round_decryption(data.into(), key.into(), number_once).into(),
        None => data,
    }
}

/// Per-block `i`: uses `keys[i % keys_count]`, `nonce = i` (spec §6).
///
/// # Safety
/// `data_array` and `result_data_array` must both point to `data_count`
/// valid, non-overlapping `CBlock128` slots; `keys_array` must point to
/// `keys_count` valid `CKey128` slots.
#[no_mangle]
pub unsafe extern "C" fn littleopc_multiple_rounds_encryption(
    handle: LittleOpcInstance,
    data_array: *const CBlock128,
    data_count: usize,
    keys_array: *const CKey128,
    keys_count: usize,
    result_data_array: *mut CBlock128,
) {
    let Some(cipher) = handle.as_mut() else { return };
    if data_array.is_null() || keys_array.is_null() || result_data_array.is_null() {
        return;
    }

    let data: Vec<Block128> = slice::from_raw_parts(data_array, data_count)
        .iter()
        .map(|&b| b.into())
        .collect();
    let keys: Vec<Key128> = slice::from_raw_parts(keys_array, keys_count)
        .iter()
        .map(|&k| k.into())
        .collect();

    let result = cipher.multiple_rounds_encryption(&data, &keys);
    let out = slice::from_raw_parts_mut(result_data_array, data_count);
    for (slot, value) in out.iter_mut().zip(result.into_iter()) {
        *slot = value.into();
    }
}

/// # Safety
/// Same contract as [`littleopc_multiple_rounds_encryption`].
#[no_mangle]
pub unsafe extern "C" fn littleopc_multiple_rounds_decryption(
    handle: LittleOpcInstance,
    data_array: *const CBlock128,
    data_count: usize,
    keys_array: *const CKey128,
    keys_count: usize,
    result_data_array: *mut CBlock128,
) {
    let Some(cipher) = handle.as_mut() else { return };
    if data_array.is_null() || keys_array.is_null() || result_data_array.is_null() {
        return;
    }

    let data: Vec<Block128> = slice::from_raw_parts(data_array, data_count)
        .iter()
        .map(|&b| b.into())
        .collect();
    let keys: Vec<Key128> = slice::from_raw_parts(keys_array, keys_count)
        .iter()
        .map(|&k| k.into())
        .collect();

    let result = cipher.multiple_rounds_decryption(&data, &keys);
    let out = slice::from_raw_parts_mut(result_data_array, data_count);
    for (slot, value) in out.iter_mut().zip(result.into_iter()) {
        *slot = value.into();
    }
}

/// Heap array of length `loop_count`; free with [`littleopc_free_blocks`].
/// Returns null on a null handle.
///
/// # Safety
/// The returned pointer (when non-null) must be passed to
/// [`littleopc_free_blocks`] exactly once and never read after that call.
#[no_mangle]
pub unsafe extern "C" fn littleopc_generate_subkey_with_encryption(
    handle: LittleOpcInstance,
    key: CKey128,
    loop_count: u64,
) -> *mut CBlock128 {
    let Some(cipher) = handle.as_mut() else { return std::ptr::null_mut() };
    let subkeys = cipher.generate_subkey_with_encryption(key.into(), loop_count);
    into_heap_array(subkeys)
}

/// # Safety
/// Same contract as [`littleopc_generate_subkey_with_encryption`].
#[no_mangle]
pub unsafe extern "C" fn littleopc_generate_subkey_with_decryption(
    handle: LittleOpcInstance,
    key: CKey128,
    loop_count: u64,
) -> *mut CBlock128 {
    let Some(cipher) = handle.as_mut() else { return std::ptr::null_mut() };
    let subkeys = cipher.generate_subkey_with_decryption(key.into(), loop_count);
    into_heap_array(subkeys)
}

fn into_heap_array(blocks: Vec<Block128>) -> *mut CBlock128 {
    let mut boxed: Box<[CBlock128]> = blocks.into_iter().map(CBlock128::from).collect();
    let ptr = boxed.as_mut_ptr();
    std::mem::forget(boxed);
    ptr
}

/// Frees an array returned by either subkey generator. `len` must match
/// the `loop_count` originally passed in.
///
/// # Safety
/// `ptr` must have been returned by [`littleopc_generate_subkey_with_encryption`]
/// or [`littleopc_generate_subkey_with_decryption`] with the same `len`,
/// and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn littleopc_free_blocks(ptr: *mut CBlock128, len: usize) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(slice::from_raw_parts_mut(ptr, len)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_round_trips_a_single_block() {
        unsafe {
            let handle = littleopc_new(1);
            let data = CBlock128 { first: 1475, second: 3695 };
            let key = CKey128 { first: 7532, second: 9512 };

            let ciphertext = littleopc_single_round_encryption(handle, data, key, 1);
            let plaintext = littleopc_single_round_decryption(handle, ciphertext, key, 1);

            assert_eq!(plaintext.first, data.first);
            assert_eq!(plaintext.second, data.second);

            littleopc_delete(handle);
        }
    }

    #[test]
    fn subkey_array_round_trips_through_free() {
        unsafe {
            let handle = littleopc_new(1);
            let key = CKey128 { first: 7532, second: 0 };
            let ptr = littleopc_generate_subkey_with_encryption(handle, key, 8);
            assert!(!ptr.is_null());
            let slice_view = slice::from_raw_parts(ptr, 8);
            assert_eq!(slice_view.len(), 8);
            littleopc_free_blocks(ptr, 8);
            littleopc_delete(handle);
        }
    }
}
