use {
    serde::Serialize,
    super::*,
};

const EDGE_COLOR: &str = "#e8e8e8";
const HIGHLIGHT_EDGE_COLOR: &str = "#000000";
const EDGE_WIDTH: u8 = 2;
const HIGHLIGHT_EDGE_WIDTH: u8 = 3;
const NODE_SIZE: u8 = 6;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NodePortrayal{
    pub id: usize,
    pub state: HealthState,
    pub size: u8,
    pub color: &'static str,
    pub tooltip: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EdgePortrayal{
    pub source: usize,
    pub target: usize,
    /// true if either end is recovered
    pub highlight: bool,
    pub color: &'static str,
    pub width: u8,
}

/// # Read only view of the network for a visualization
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NetworkPortrayal{
    pub step: usize,
    pub nodes: Vec<NodePortrayal>,
    pub edges: Vec<EdgePortrayal>,
}

impl NetworkPortrayal{
    pub fn from_graph(graph: &ContactGraph, step: usize) -> Self
    {
        let nodes = graph.agents()
            .map(
                |agent|
                NodePortrayal{
                    id: agent.id,
                    state: agent.state,
                    size: NODE_SIZE,
                    color: agent.state.color(),
                    tooltip: format!("id: {}<br>state: {}", agent.id, agent.state)
                }
            ).collect();

        let edges = graph.edges()
            .map(
                |(source, target)|
                {
                    let highlight = graph.agent(source).state.rec_check()
                        || graph.agent(target).state.rec_check();
                    let (color, width) = if highlight {
                        (HIGHLIGHT_EDGE_COLOR, HIGHLIGHT_EDGE_WIDTH)
                    } else {
                        (EDGE_COLOR, EDGE_WIDTH)
                    };
                    EdgePortrayal{
                        source,
                        target,
                        highlight,
                        color,
                        width
                    }
                }
            ).collect();

        Self{
            step,
            nodes,
            edges
        }
    }
}

impl SimulationState{
    pub fn portrayal(&self) -> NetworkPortrayal
    {
        NetworkPortrayal::from_graph(self.graph(), self.step_count())
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn edges_next_to_recovered_are_highlighted()
    {
        let mut graph = ContactGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        graph.agent_mut(1).seed_state(HealthState::Recovered);
        graph.agent_mut(3).seed_state(HealthState::Dead);
        let portrayal = NetworkPortrayal::from_graph(&graph, 7);

        assert_eq!(portrayal.step, 7);
        let highlights: Vec<_> = portrayal.edges.iter().map(|e| e.highlight).collect();
        assert_eq!(highlights, vec![true, true, false]);
        assert_eq!(portrayal.edges[0].width, 3);
        assert_eq!(portrayal.edges[2].color, "#e8e8e8");
        assert_eq!(portrayal.nodes[3].color, "#000000");
        assert_eq!(portrayal.nodes[1].tooltip, "id: 1<br>state: RECOVERED");

        let json = serde_json::to_value(&portrayal).unwrap();
        assert_eq!(json["edges"].as_array().unwrap().len(), 3);
        assert_eq!(json["nodes"][0]["color"], "#ffcc00");
    }
}
