//! Advent of Code 2017.

solvers!(
    d01_inverse_captcha,
    d02_corruption_checksum,
    d03_spiral_memory,
    d04_passphrases,
);
