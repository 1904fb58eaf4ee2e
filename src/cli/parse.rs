use graphstep_core::graph::{VertexId, Weight};
use graphstep_core::traversal::Algorithm;

/// An edge given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeArg {
    pub source: VertexId,
    pub target: VertexId,
    /// `None` means the configured default weight
    pub weight: Option<Weight>,
}

fn parse_vertex_id(s: &str) -> std::result::Result<VertexId, String> {
    s.trim()
        .parse::<VertexId>()
        .map_err(|_| format!("invalid vertex id '{}'", s))
}

fn parse_weight(s: &str) -> std::result::Result<Weight, String> {
    let weight = s
        .trim()
        .parse::<Weight>()
        .map_err(|_| format!("invalid weight '{}'", s))?;
    if !weight.is_finite() {
        return Err(format!("weight must be finite, got '{}'", s));
    }
    Ok(weight)
}

/// Parse `SOURCE:TARGET[:WEIGHT]`
pub fn parse_edge_arg(s: &str) -> std::result::Result<EdgeArg, String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [source, target] => Ok(EdgeArg {
            source: parse_vertex_id(source)?,
            target: parse_vertex_id(target)?,
            weight: None,
        }),
        [source, target, weight] => Ok(EdgeArg {
            source: parse_vertex_id(source)?,
            target: parse_vertex_id(target)?,
            weight: Some(parse_weight(weight)?),
        }),
        _ => Err(format!("expected SOURCE:TARGET[:WEIGHT], got '{}'", s)),
    }
}

/// Parse `SOURCE:TARGET`
pub fn parse_vertex_pair(s: &str) -> std::result::Result<(VertexId, VertexId), String> {
    match s.split(':').collect::<Vec<_>>().as_slice() {
        [source, target] => Ok((parse_vertex_id(source)?, parse_vertex_id(target)?)),
        _ => Err(format!("expected SOURCE:TARGET, got '{}'", s)),
    }
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_without_weight() {
        assert_eq!(
            parse_edge_arg("0:1").unwrap(),
            EdgeArg {
                source: 0,
                target: 1,
                weight: None
            }
        );
    }

    #[test]
    fn test_parse_edge_with_weight_and_negative_ids() {
        assert_eq!(
            parse_edge_arg("-2:3:0.5").unwrap(),
            EdgeArg {
                source: -2,
                target: 3,
                weight: Some(0.5)
            }
        );
    }

    #[test]
    fn test_parse_edge_rejects_garbage() {
        assert!(parse_edge_arg("a:1").is_err());
        assert!(parse_edge_arg("1").is_err());
        assert!(parse_edge_arg("1:2:x").is_err());
        assert!(parse_edge_arg("1:2:3:4").is_err());
        assert!(parse_edge_arg("1:2:NaN").is_err());
        assert!(parse_edge_arg("1:2:inf").is_err());
    }

    #[test]
    fn test_parse_vertex_pair() {
        assert_eq!(parse_vertex_pair("4:5").unwrap(), (4, 5));
        assert!(parse_vertex_pair("4:5:1").is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("bfs").unwrap(), Algorithm::Bfs);
        assert!(parse_algorithm("astar").unwrap_err().contains("unknown algorithm"));
    }
}
