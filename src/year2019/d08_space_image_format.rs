use std::io::Write;

use crate::{helpers, Error};

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let data = input.trim();
    writeln!(out, "{}", checksum(data, WIDTH, HEIGHT)?)?;
    for row in decode(data, WIDTH, HEIGHT)? {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn layers(data: &str, width: usize, height: usize) -> Vec<Vec<char>> {
    helpers::chunked(data.chars(), width * height).collect()
}

/// Count of 1s times count of 2s on the layer with the fewest 0s.
fn checksum(data: &str, width: usize, height: usize) -> Result<usize, Error> {
    fn count(layer: &[char], digit: char) -> usize {
        layer.iter().filter(|&&c| c == digit).count()
    }

    let layers = layers(data, width, height);
    let layer = layers
        .iter()
        .min_by_key(|layer| count(layer, '0'))
        .ok_or_else(|| Error::InvalidInput("empty image".to_string()))?;

    Ok(count(layer, '1') * count(layer, '2'))
}

/// Rows of the visible image, pixels separated by a space.
fn decode(data: &str, width: usize, height: usize) -> Result<Vec<String>, Error> {
    let pixels = helpers::transpose(layers(data, width, height))
        .into_iter()
        .enumerate()
        .map(|(ind, colors)| {
            colors
                .into_iter()
                .flatten()
                .find_map(|color| match color {
                    '0' => Some(' '),
                    '1' => Some('#'),
                    _ => None,
                })
                .ok_or_else(|| {
                    Error::InvalidInput(format!("pixel #{} is transparent all the way", ind))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(helpers::chunked(pixels, width)
        .map(|row| row.iter().map(char::to_string).collect::<Vec<_>>().join(" "))
        .collect())
}

#[test]
fn test_checksum() {
    assert_eq!(checksum("123456789012", 3, 2).unwrap(), 1);
    assert!(checksum("", 3, 2).is_err());
}

#[test]
fn test_decode() {
    assert_eq!(decode("0222112222120000", 2, 2).unwrap(), vec!["  #", "#  "]);
    assert!(decode("2222", 2, 1).is_err());
}
