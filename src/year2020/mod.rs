//! Advent of Code 2020.

solvers!(
    d01_report_repair,
    d02_password_philosophy,
    d03_toboggan_trajectory,
    d04_passport_processing,
    d05_binary_boarding,
    d06_custom_customs,
    d07_handy_haversacks,
    d08_handheld_halting,
    d09_encoding_error,
    d10_adapter_array,
    d11_seating_system,
    d12_rain_risk,
);
