use std::{
    collections::{HashMap, HashSet, VecDeque},
    io::Write,
};

use crate::{helpers, parse, Error};

const CENTER: &str = "COM";

pub fn solve(input: &str, out: &mut dyn Write) -> Result<(), Error> {
    let orbits = parse::string_rows(input)
        .into_iter()
        .map(|row| match <[String; 2]>::try_from(row) {
            Ok([center, satellite]) => Ok((center, satellite)),
            Err(row) => Err(Error::InvalidInput(format!("malformed orbit {:?}", row))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "{}", count_orbits(&orbits))?;
    writeln!(out, "{}", count_transfers(&orbits, "YOU", "SAN")?)?;
    Ok(())
}

/// Total of direct and indirect orbits of objects reachable from the center.
fn count_orbits(orbits: &[(String, String)]) -> usize {
    let satellites = helpers::grouped(orbits.iter().map(|(c, s)| (c.as_str(), s.as_str())));
    let mut total = 0;
    let mut queue = VecDeque::from([(CENTER, 0)]);
    while let Some((object, depth)) = queue.pop_front() {
        total += depth;
        for &satellite in satellites.get(object).into_iter().flatten() {
            queue.push_back((satellite, depth + 1));
        }
    }

    total
}

/// Objects `object` orbits directly or indirectly.
fn ancestors<'a>(
    object: &str,
    centers: &HashMap<&str, &'a str>,
) -> Result<HashSet<&'a str>, Error> {
    let mut center = *centers
        .get(object)
        .ok_or_else(|| Error::InvalidInput(format!("{} orbits nothing", object)))?;
    let mut ancestors = HashSet::from([center]);
    while let Some(&next) = centers.get(center) {
        ancestors.insert(next);
        center = next;
    }

    Ok(ancestors)
}

/// Transfers between the objects `from` and `to` are orbiting.
fn count_transfers(orbits: &[(String, String)], from: &str, to: &str) -> Result<usize, Error> {
    let centers = orbits
        .iter()
        .map(|(c, s)| (s.as_str(), c.as_str()))
        .collect::<HashMap<_, _>>();
    let from = ancestors(from, &centers)?;
    let to = ancestors(to, &centers)?;

    Ok(from.symmetric_difference(&to).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_orbits() -> Vec<(String, String)> {
        "COM)B B)C C)D D)E E)F B)G G)H D)I E)J J)K K)L K)YOU I)SAN"
            .split(' ')
            .map(|s| {
                let (c, o) = s.split_once(')').unwrap();
                (c.to_string(), o.to_string())
            })
            .collect()
    }

    #[test]
    fn test_count_orbits() {
        let orbits = example_orbits();
        assert_eq!(count_orbits(&orbits[..11]), 42);
    }

    #[test]
    fn test_count_transfers() {
        assert_eq!(count_transfers(&example_orbits(), "YOU", "SAN").unwrap(), 4);
        assert!(count_transfers(&example_orbits(), "YOU", "NOBODY").is_err());
    }
}
