use bytemuck::Pod;

// Reinterpret the backing memory of a slice of T as a slice of U, without
// copying element by element. The Pod bounds rule out padding and invalid
// bit patterns at compile time; the size check keeps the element count
// identical (bytemuck would otherwise accept casts that resize, like
// [u32] -> [u16]). Any remaining mismatch bytemuck reports (alignment)
// yields an empty slice rather than garbage.
pub fn copy_to_type<T: Pod, U: Pod>(source: &[T]) -> &[U] {
    if source.is_empty() || std::mem::size_of::<T>() != std::mem::size_of::<U>() {
        return &[];
    }

    bytemuck::try_cast_slice(source).unwrap_or(&[])
}
