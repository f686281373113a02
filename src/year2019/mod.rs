//! Advent of Code 2019.

solvers!(
    d01_rocket_equation,
    d02_1202_program_alarm,
    d03_crossed_wires,
    d04_secure_container,
    d05_chance_of_asteroids,
    d06_universal_orbit_map,
    d07_amplification_circuit,
    d08_space_image_format,
    d09_sensor_boost,
    d10_monitoring_station,
    d11_space_police,
);
