use gnuplot::{AxesCommon, Caption, Color, Figure};

use homotopy::{Blend, Exp, Linear, Square, Trig};

const COLORS: [&str; 6] = ["black", "blue", "cyan", "green", "orange", "red"];

fn main() {
    let mut plots = Plots { plots: Vec::new() };
    plots.add("linear", Linear);
    plots.add("square", Square);
    plots.add("trig", Trig);
    plots.add("exp", Exp);

    plots.show_gnuplot();
}

fn sample(n: usize, min_x: f64, max_x: f64, h: impl Fn(f64) -> f64) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut vs = Vec::new();

    for i in 0..n {
        let x = min_x + i as f64 / (n - 1) as f64 * (max_x - min_x);

        xs.push(x);
        vs.push(h(x));
    }

    (xs, vs)
}

struct Slice {
    t: f64,
    xs: Vec<f64>,
    vs: Vec<f64>,
}

struct Plot {
    name: &'static str,
    slices: Vec<Slice>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, name: &'static str, rule: impl Blend<f64>) {
        let family = homotopy::homotopy(
            rule,
            homotopy::fun(|x: f64| x * x),
            homotopy::fun(|x: f64| 2.0 * x.sin() + 1.0),
        );

        let slices = family
            .frames(COLORS.len() - 1)
            .map(|(t, h)| {
                let (xs, vs) = sample(100, -2.0, 2.0, |x| h.eval(x));
                Slice { t, xs, vs }
            })
            .collect();

        self.plots.push(Plot { name, slices });
    }

    fn show_gnuplot(&self) {
        let mut figure = Figure::new();

        // Show plots in a square rows/columns layout
        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            let axes = figure
                .axes2d()
                .set_title(plot.name, &[])
                .set_x_label("x", &[])
                .set_y_label("h_t(x)", &[])
                .set_pos_grid(square_size, square_size, i as u32);

            for (slice, color) in plot.slices.iter().zip(COLORS.iter()) {
                let caption = format!("t = {:.1}", slice.t);
                axes.lines(&slice.xs, &slice.vs, &[Caption(caption.as_str()), Color(*color)]);
            }
        }

        figure.show().unwrap();
    }
}
