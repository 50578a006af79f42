use crate::widgets::DemoState;

pub fn render_index(demo: &DemoState) -> String {
    let snapshot = demo.snapshot();
    INDEX_HTML
        .replace("{{COUNT}}", &snapshot.count.to_string())
        .replace("{{BOX_CLASS}}", &demo.box_classes().to_attr())
        .replace("{{CARD_CLASS}}", if snapshot.card_flipped { "flipped" } else { "" })
        .replace("{{LOADER_CLASS}}", if snapshot.loader_active { "active" } else { "" })
        .replace("{{LOADER_HIDDEN}}", if snapshot.loader_active { "false" } else { "true" })
        .replace("{{MODAL_CLASS}}", if snapshot.modal_open { "active" } else { "" })
        .replace("{{MODAL_HIDDEN}}", if snapshot.modal_open { "false" } else { "true" })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Widget Lab</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe0f2;
      --ink: #24313f;
      --accent: #3b82c4;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4ecf5 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6977;
      font-size: 1rem;
    }

    section.widget {
      background: white;
      border-radius: 20px;
      padding: 22px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    section.widget h2 {
      margin: 0;
      font-size: 1.25rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(59, 130, 196, 0.3);
      transition: transform 150ms ease, box-shadow 150ms ease;
      justify-self: start;
    }

    button:active {
      transform: scale(0.98);
    }

    input[type="text"] {
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      max-width: 320px;
    }

    .box {
      width: 90px;
      height: 90px;
      border-radius: 18px;
      background: var(--accent-2);
      transform: translateX(0);
      transition: transform 600ms ease, background 600ms ease;
    }

    .box.slide-in {
      transform: translateX(220px);
      background: var(--accent);
    }

    #greetingMessage {
      min-height: 1.4em;
      font-weight: 600;
      color: var(--accent-2);
      opacity: 0;
      transition: opacity 400ms ease;
    }

    #greetingMessage.visible {
      opacity: 1;
    }

    #counterValue {
      font-size: 2.2rem;
      font-weight: 600;
      color: var(--accent);
      display: inline-block;
      transition: transform 200ms ease;
    }

    .card-container {
      width: 240px;
      height: 150px;
      perspective: 900px;
      cursor: pointer;
      outline-offset: 4px;
    }

    .card {
      position: relative;
      width: 100%;
      height: 100%;
      transform-style: preserve-3d;
      transition: transform 600ms ease;
    }

    .card.flipped {
      transform: rotateY(180deg);
    }

    .card-face {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      border-radius: 16px;
      backface-visibility: hidden;
      font-weight: 600;
    }

    .card-front {
      background: var(--accent-2);
      color: white;
    }

    .card-back {
      background: var(--accent);
      color: white;
      transform: rotateY(180deg);
    }

    .loader {
      width: 44px;
      height: 44px;
      border: 5px solid rgba(47, 72, 88, 0.15);
      border-top-color: var(--accent);
      border-radius: 50%;
      opacity: 0;
    }

    .loader.active {
      opacity: 1;
      animation: spin 900ms linear infinite;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(36, 49, 63, 0.55);
      display: none;
      place-items: center;
      padding: 18px;
    }

    .modal.active {
      display: grid;
    }

    .modal-content {
      background: white;
      border-radius: 20px;
      padding: 28px;
      width: min(420px, 100%);
      display: grid;
      gap: 14px;
      box-shadow: var(--shadow);
    }

    .modal-content h2 {
      margin: 0;
    }

    .status {
      font-size: 0.95rem;
      color: #5c6977;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .box.slide-in {
        transform: translateX(120px);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Widget Lab</h1>
      <p class="subtitle">Interactive widgets whose state lives on the server; the page only applies what it is told.</p>
    </header>

    <section class="widget">
      <h2>Slide-in box</h2>
      <div id="box" class="box {{BOX_CLASS}}"></div>
      <button id="animateBoxBtn" type="button">Animate box</button>
    </section>

    <section class="widget">
      <h2>Greeting</h2>
      <input id="nameInput" type="text" placeholder="Your name" autocomplete="name" />
      <button id="greetBtn" type="button">Greet me</button>
      <p id="greetingMessage" aria-live="polite"></p>
    </section>

    <section class="widget">
      <h2>Counter</h2>
      <span id="counterValue">{{COUNT}}</span>
      <button id="incrementBtn" type="button">Count +1</button>
    </section>

    <section class="widget">
      <h2>Flip card</h2>
      <div class="card-container" tabindex="0" role="button" aria-label="Flip the card">
        <div id="card" class="card {{CARD_CLASS}}">
          <div class="card-face card-front">Front</div>
          <div class="card-face card-back">Back</div>
        </div>
      </div>
      <p class="subtitle">Click, or focus and press Enter or Space.</p>
    </section>

    <section class="widget">
      <h2>Loader</h2>
      <div id="loader" class="loader {{LOADER_CLASS}}" aria-hidden="{{LOADER_HIDDEN}}" role="status" aria-label="Loading"></div>
      <button id="toggleLoaderBtn" type="button">Toggle loader</button>
    </section>

    <section class="widget">
      <h2>Modal dialog</h2>
      <button id="showModalBtn" type="button">Open modal</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div id="modal" class="modal {{MODAL_CLASS}}" aria-hidden="{{MODAL_HIDDEN}}" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
    <div id="modalContent" class="modal-content" tabindex="-1">
      <h2 id="modalTitle">Hello from the modal</h2>
      <p>Close me with the button, the Escape key, or by clicking outside.</p>
      <button id="closeModalBtn" type="button">Close</button>
    </div>
  </div>

  <script>
    const boxEl = document.getElementById('box');
    const animateBoxBtn = document.getElementById('animateBoxBtn');
    const nameInput = document.getElementById('nameInput');
    const greetBtn = document.getElementById('greetBtn');
    const greetingMessage = document.getElementById('greetingMessage');
    const incrementBtn = document.getElementById('incrementBtn');
    const counterValue = document.getElementById('counterValue');
    const cardContainer = document.querySelector('.card-container');
    const cardEl = document.getElementById('card');
    const toggleLoaderBtn = document.getElementById('toggleLoaderBtn');
    const loaderEl = document.getElementById('loader');
    const showModalBtn = document.getElementById('showModalBtn');
    const modalEl = document.getElementById('modal');
    const closeModalBtn = document.getElementById('closeModalBtn');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const body = await res.text();
        let message = body || 'Request failed';
        try {
          message = JSON.parse(body).error || message;
        } catch (_) {
          // plain-text rejection from the framework
        }
        throw new Error(message);
      }
      return res.json();
    };

    const applyModal = (view) => {
      modalEl.classList.toggle('active', view.open);
      modalEl.setAttribute('aria-hidden', String(view.aria_hidden));
      if (view.focus) {
        const target = document.getElementById(view.focus);
        if (target) {
          target.focus();
        }
      }
    };

    const applyLoader = (view) => {
      loaderEl.classList.toggle('active', view.active);
      loaderEl.setAttribute('aria-hidden', String(view.aria_hidden));
    };

    animateBoxBtn.addEventListener('click', () => {
      post('/api/class/toggle', { element: 'box', class: 'slide-in' })
        .then((data) => boxEl.classList.toggle(data.class, data.present))
        .catch((err) => setStatus(err.message, 'error'));
    });

    greetBtn.addEventListener('click', () => {
      post('/api/greet', { name: nameInput.value })
        .then((data) => {
          greetingMessage.textContent = data.message;
          greetingMessage.classList.add('visible');
          setTimeout(() => greetingMessage.classList.remove('visible'), 3000);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    incrementBtn.addEventListener('click', () => {
      post('/api/counter/click')
        .then((data) => {
          counterValue.textContent = data.count;
          counterValue.style.transform = 'scale(1.4)';
          setTimeout(() => {
            counterValue.style.transform = 'scale(1)';
          }, 200);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    cardContainer.addEventListener('click', () => {
      post('/api/card/flip')
        .then((data) => cardEl.classList.toggle('flipped', data.flipped))
        .catch((err) => setStatus(err.message, 'error'));
    });

    cardContainer.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' || event.key === ' ') {
        event.preventDefault();
      }
      post('/api/card/key', { key: event.key })
        .then((data) => cardEl.classList.toggle('flipped', data.flipped))
        .catch((err) => setStatus(err.message, 'error'));
    });

    toggleLoaderBtn.addEventListener('click', () => {
      post('/api/loader/toggle')
        .then(applyLoader)
        .catch((err) => setStatus(err.message, 'error'));
    });

    const closeModal = () => {
      post('/api/modal/close')
        .then(applyModal)
        .catch((err) => setStatus(err.message, 'error'));
    };

    showModalBtn.addEventListener('click', () => {
      post('/api/modal/open')
        .then(applyModal)
        .catch((err) => setStatus(err.message, 'error'));
    });

    closeModalBtn.addEventListener('click', closeModal);

    modalEl.addEventListener('click', (event) => {
      if (event.target === modalEl) {
        closeModal();
      }
    });

    document.addEventListener('keydown', (event) => {
      if (event.key === 'Escape' && modalEl.classList.contains('active')) {
        closeModal();
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{DemoState, SLIDE_IN};

    #[test]
    fn render_substitutes_every_placeholder() {
        let mut demo = DemoState::default();
        demo.counter.increment();
        demo.counter.increment();
        demo.class_set_mut("box").unwrap().toggle(SLIDE_IN);
        demo.modal.open();

        let page = render_index(&demo);
        assert!(!page.contains("{{"));
        assert!(page.contains(r#"<span id="counterValue">2</span>"#));
        assert!(page.contains("box slide-in"));
        assert!(page.contains("modal active"));
        assert!(page.contains(r#"class="modal active" aria-hidden="false""#));
    }

    #[test]
    fn render_default_state_hides_overlays() {
        let page = render_index(&DemoState::default());
        assert!(page.contains(r#"class="modal " aria-hidden="true""#));
        assert!(page.contains(r#"class="loader " aria-hidden="true""#));
        assert!(page.contains(r#"<span id="counterValue">0</span>"#));
    }
}
