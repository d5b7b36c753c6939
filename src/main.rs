use blueprint_detector::image::GrayView;
use blueprint_detector::{PlanDetector, PlanParams};
use chrono::Utc;

fn main() {
    // Demo stub: runs the pipeline over a featureless synthetic buffer.
    let w = 640usize;
    let h = 480usize;
    let gray = vec![220u8; w * h];
    let img = GrayView {
        w,
        h,
        data: &gray,
    };

    let detector = PlanDetector::new(PlanParams::default());
    match detector.process(img, "demo/blank", Utc::now()) {
        Ok(plan) => println!(
            "axes: {}v/{}h elements={}",
            plan.vertical_axes.len(),
            plan.horizontal_axes.len(),
            plan.elements.len()
        ),
        Err(err) => eprintln!("{err}"),
    }
}
