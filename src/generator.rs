use crate::draw::{BonusSet, MainSet, BONUS_COUNT, MAIN_COUNT, POOL_MAX};
use fastrand::Rng;

/// One uniformly random candidate: 7 main numbers (ascending) and 2 bonus
/// numbers taken from the remaining 30. No filter is applied here.
pub fn generate(rng: &mut Rng) -> (MainSet, BonusSet) {
    let mut pool: Vec<u8> = (1..=POOL_MAX).collect();
    rng.shuffle(&mut pool);

    let mut main = [0u8; MAIN_COUNT];
    main.copy_from_slice(&pool[..MAIN_COUNT]);
    main.sort_unstable();

    let mut bonus = [0u8; BONUS_COUNT];
    bonus.copy_from_slice(&pool[MAIN_COUNT..MAIN_COUNT + BONUS_COUNT]);
    bonus.sort_unstable();

    (main, bonus)
}

pub fn generate_batch(rng: &mut Rng, count: usize) -> Vec<(MainSet, BonusSet)> {
    (0..count).map(|_| generate(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::validate_numbers;

    #[test]
    fn test_generated_sets_are_valid() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..500 {
            let (main, bonus) = generate(&mut rng);
            assert!(validate_numbers(&main, &bonus).is_ok());
            assert!(main.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = generate_batch(&mut Rng::with_seed(42), 20);
        let b = generate_batch(&mut Rng::with_seed(42), 20);
        assert_eq!(a, b);
    }
}
