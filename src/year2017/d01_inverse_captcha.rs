use std::io::Write;

use crate::Error;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let digits = input
        .trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| Error::InvalidInput(format!("non-digit {:?} in captcha", c)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "{}", captcha_sum(&digits, 1))?;
    writeln!(out, "{}", captcha_sum(&digits, digits.len() / 2))?;
    Ok(())
}

/// Sum of digits matching the digit `offset` places ahead, wrapping around.
fn captcha_sum(digits: &[u32], offset: usize) -> u32 {
    digits
        .iter()
        .zip(digits.iter().cycle().skip(offset))
        .filter(|(a, b)| a == b)
        .map(|(a, _)| a)
        .sum()
}

#[test]
fn test_captcha_sum() {
    assert_eq!(captcha_sum(&[1, 1, 2, 2], 1), 3);
    assert_eq!(captcha_sum(&[1, 1, 1, 1], 1), 4);
    assert_eq!(captcha_sum(&[1, 2, 3, 4], 1), 0);
    assert_eq!(captcha_sum(&[9, 1, 2, 1, 2, 1, 2, 9], 1), 9);
    assert_eq!(captcha_sum(&[1, 2, 2, 1], 2), 0);
    assert_eq!(captcha_sum(&[1, 2, 3, 1, 2, 3], 3), 12);
    assert_eq!(captcha_sum(&[], 0), 0);
}
