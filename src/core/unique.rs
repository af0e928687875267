/// Keep only the items that are alone in their equivalence class.
///
/// Unlike plain deduplication, every member of a class with two or more
/// items is dropped, including the first one seen: `[1, 2, 2, 3]` becomes
/// `[1, 3]`. Survivors keep their original relative order.
///
/// Examples whose normalized commands collide cannot be attributed to a single
/// counterpart in another language, so they are excluded rather than paired
/// arbitrarily.
pub fn retain_unique<T, F>(items: impl IntoIterator<Item = T>, equivalent: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut survivors: Vec<T> = Vec::new();
    let mut rejected: Vec<T> = Vec::new();

    for item in items {
        if let Some(index) = survivors.iter().position(|s| equivalent(s, &item)) {
            rejected.push(survivors.remove(index));
            rejected.push(item);
            continue;
        }

        if rejected.iter().any(|r| equivalent(r, &item)) {
            continue;
        }

        survivors.push(item);
    }

    survivors
}
