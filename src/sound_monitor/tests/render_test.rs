#[cfg(test)]
mod render_test {
    use crate::device_display::interface::TextAlign;
    use crate::sound_monitor::core::{Model, WAITING_LABEL};
    use crate::sound_monitor::tests::fixture::Fixture;

    #[test]
    fn test_render_waiting() {
        let f = Fixture::new(vec![]);

        f.sound_monitor.render.render(&Model::Idle).unwrap();

        let frames = f.presented_frames();
        assert_eq!(frames.len(), 1);

        let frame = &frames[0];
        assert_eq!(frame.background, 255);
        assert_eq!(frame.texts.len(), 2);

        let label = &frame.texts[0];
        assert_eq!(label.text, WAITING_LABEL);
        assert_eq!(label.size, f.config.label_text_size);
        assert_eq!(label.x, f.config.canvas_width / 2.0);
        assert_eq!(label.y, f.config.canvas_height - 16.0);
        assert_eq!(label.align, TextAlign::CENTER);
        assert_eq!(label.gray, 0);

        let cue = &frame.texts[1];
        assert_eq!(cue.text, "Tutto ok");
        assert_eq!(cue.size, f.config.cue_text_size);
        assert_eq!(cue.x, f.config.canvas_width / 2.0);
        assert_eq!(cue.y, f.config.canvas_height / 2.0);
        assert_eq!(cue.align, TextAlign::CENTER);
    }

    #[test]
    fn test_render_alarm() {
        let f = Fixture::new(vec![]);
        let model = Model::Active {
            label: "Allarme Antincendio".to_string(),
        };

        f.sound_monitor.render.render(&model).unwrap();
        f.sound_monitor.render.render(&model).unwrap();

        let frames = f.presented_frames();
        assert_eq!(frames.len(), 2);
        for frame in frames {
            let texts = frame.texts.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
            assert_eq!(texts, vec!["Allarme Antincendio", "ALLARME ANTINCENDIO"]);
        }
    }
}
